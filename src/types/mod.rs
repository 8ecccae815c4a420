//! Request payloads sent to the gateway and the results decoded from its answers.

mod address;
mod cart;
mod customer;
mod other;
mod response;
mod returns;
mod urls;

pub use address::Address;
pub use cart::{Cart, CartItem, SUPPORTED_CURRENCY, item_type};
pub use customer::{
    BasicCustomer, Customer, DetailedCustomer, FullCustomer, LimitedCustomer, Registered,
};
pub use other::{BasicOther, CreateOther, Other, StartOther};
pub use response::{CreateResult, InitResult, Notification, NotificationStatus};
pub use returns::{RETURN_DATE_FORMAT, ReturnData};
pub use urls::{RedirectUrls, Urls};
