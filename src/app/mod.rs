pub mod patches;
