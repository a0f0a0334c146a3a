// This file makes the screen modules available to the rest of the application.

pub mod history;
pub mod home;
pub mod profile;
pub mod recharge;
