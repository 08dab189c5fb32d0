mod common;

mod query;
mod sharing;
