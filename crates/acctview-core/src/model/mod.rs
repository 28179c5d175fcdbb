pub mod api_log;
pub mod invoice;
pub mod member;
pub mod order;
pub mod record;
pub mod value;

pub use api_log::{ApiLog, ApiLogStatus, HttpMethod};
pub use invoice::{Invoice, InvoiceStatus, InvoiceType};
pub use member::{Member, TeamRole, UserStatus};
pub use order::{OrderListItem, OrderStatus, OrderType, PaymentStatus};
pub use record::Record;
pub use value::{collate, FieldValue, ValueKind};
