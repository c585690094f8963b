// silentmode-mobile — native library packaging for Android and iOS
// Exports the channel bridge API to the embedding platform shell

pub use silentmode_core::*;
