mod bridge;
mod global;
mod scenarios;
