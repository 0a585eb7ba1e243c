//! climate-api - a read-only HTTP query facade over a fixed
//! climate-observation dataset (station metadata and daily measurements).

pub mod cli;
pub mod dataset;
pub mod error;
pub mod http_server;
