pub mod fiat_shamir;
pub mod merkle_tree;
