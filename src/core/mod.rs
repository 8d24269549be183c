pub mod forwarder;
pub mod integration;
pub mod mapper;

pub use crate::domain::model::{
    ForwardResponse, HiperCustomer, HiperItem, HiperOrder, HiperTaxes, MercusCustomer,
    MercusOrder, MercusProduct, MercusTaxes,
};
pub use crate::domain::ports::{ConfigProvider, OrderForwarder};
pub use crate::utils::error::Result;
