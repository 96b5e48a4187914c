pub mod docs;
pub mod home;
pub mod lend;
pub mod looper;
pub mod not_found;
pub mod perpetuals;
pub mod pools;
pub mod portfolio;
pub mod stake;
pub mod swap;
