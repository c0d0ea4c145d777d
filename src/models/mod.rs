pub mod audit;
pub mod decorator;
pub mod effect;
pub mod kind;
pub mod notification;
