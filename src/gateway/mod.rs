/**
 * Client Gateway (§4.1): terminates duplex client connections, parses
 * framed requests, dispatches to the four request handlers, and fans out
 * unsolicited `update` pushes delivered by the Change-Event Dispatcher.
 */
mod handlers;
mod outbound;
mod protocol;
mod server;
mod session_table;

pub use handlers::GatewayHandlers;
pub use outbound::OutboundQueue;
pub use protocol::{ClientRequest, DataType, ErrorBody, ErrorCode, RequestAction, RequestData, ServerFrame, PROTOCOL_VERSION};
pub use server::{router, serve, SessionPolicy};
pub use session_table::{SessionEntry, SessionTable};
