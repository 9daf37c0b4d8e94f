//! Wire types and payload transforms for the podium leaderboard service.
//!
//! Defines the JSON messages exchanged with clients, the masking codec
//! applied to submissions, and the decoding of a masked submission into a
//! validated [`ScoreRecord`](podium_types::ScoreRecord).

pub mod codec;
pub mod endpoint;
pub mod error;
pub mod message;
pub mod submission;

pub use codec::{MaskingCodec, DEFAULT_MASK_PREFIX};
pub use endpoint::{endpoints, limits};
pub use error::{ProtocolError, ProtocolResult};
pub use message::{ErrorResponse, HealthResponse, ScoresQuery, SubmitEnvelope, SubmitResponse};
pub use submission::decode_submission;
