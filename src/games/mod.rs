pub mod rps;
