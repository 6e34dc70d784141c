pub mod navigator;
pub mod validator;
