mod catalog;
mod common;
mod profile;
