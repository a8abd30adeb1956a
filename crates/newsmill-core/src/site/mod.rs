mod assets;
mod builder;
mod pages;
mod sitemap;

pub use builder::{build_site, BuildReport};
