pub mod monotone_chain;
