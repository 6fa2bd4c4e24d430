mod models;
mod seed;
