mod config;
mod contact;
mod intro;
mod navigation;
