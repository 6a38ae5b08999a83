// msr605/src/protocol/responses/status.rs

use crate::constants::{COERCIVITY_HI, COERCIVITY_LOW, COMM_TEST_ACK};
use crate::protocol::frame::ResponseFrame;
use crate::protocol::responses::Response;
use crate::types::Coercivity;

/// The communication test passes only on the exact `ESC y` pattern; any
/// other reply is surfaced as its status for the controller to reject.
pub fn decode_comm_test(frame: &ResponseFrame) -> Response {
    match frame.status_byte {
        Some(COMM_TEST_ACK) => Response::TestAck,
        _ => Response::Status(frame.device_status()),
    }
}

/// Coercivity queries answer with a literal 'H' or 'L'.
pub fn decode_coercivity(frame: &ResponseFrame) -> Response {
    match frame.status_byte {
        Some(COERCIVITY_HI) => Response::Coercivity(Coercivity::High),
        Some(COERCIVITY_LOW) => Response::Coercivity(Coercivity::Low),
        _ => Response::Status(frame.device_status()),
    }
}
