mod config;
mod scan;
mod transform;
