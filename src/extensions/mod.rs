pub mod normalize_ext;
