// Library exports for fqgroup
pub mod group_merge;
pub mod merge;
pub mod merge_all;
pub mod metadata;
pub mod pairing;
