pub mod audit;
pub mod client_ip;
