mod common;
mod overcommitment;
mod stats;
