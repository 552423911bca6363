pub mod add_form;
pub mod list;

pub use add_form::AddCustomerForm;
pub use list::CustomerList;
