//! Wire models for the MHFL backend API

mod account;
mod algorithm;
mod auth;
mod dataset;
mod resources;

pub use account::{Account, CreateAccountRequest, Gender, UpdateAccountRequest};
pub use algorithm::Algorithm;
pub use auth::{
    AuthorizedUser, Captcha, CodePurpose, LoginRequest, RegisterRequest, ResetConfirmRequest,
    ResetPasswordRequest,
};
pub use dataset::Dataset;
pub use resources::{CpuInfo, GpuInfo, MemoryInfo, SystemResources};
