use chrono::{DateTime, Utc};
use podium_types::{Category, RunTime, ScoreRecord};
use serde_json::Value;
use tracing::debug;

use crate::codec::MaskingCodec;
use crate::error::{ProtocolError, ProtocolResult};
use crate::message::SubmitEnvelope;

/// Turn a submission envelope into a validated record ingested at `now`.
///
/// The masked payload must reveal to a JSON object with `name` and `time`.
/// The name is sanitized into a [`Category`], the time may be a number or a
/// numeric string and must be finite and non-negative, and any `date` sent
/// by the client is replaced. Other keys are kept on the record.
pub fn decode_submission(
    codec: &MaskingCodec,
    envelope: &SubmitEnvelope,
    now: DateTime<Utc>,
) -> ProtocolResult<ScoreRecord> {
    let masked = match &envelope.data {
        None | Some(Value::Null) => return Err(ProtocolError::NoData),
        Some(Value::String(s)) => s,
        Some(_) => return Err(ProtocolError::InvalidData),
    };

    let revealed = codec.reveal(masked).ok_or(ProtocolError::InvalidData)?;

    let mut fields = match serde_json::from_str::<Value>(&revealed) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            return Err(ProtocolError::InvalidScore(format!(
                "expected an object, got {}",
                kind_of(&other)
            )))
        }
        Err(e) => return Err(ProtocolError::InvalidScore(e.to_string())),
    };

    let (Some(name), Some(time)) = (fields.remove("name"), fields.remove("time")) else {
        return Err(ProtocolError::MissingFields);
    };

    let category = match name {
        Value::String(s) => Category::sanitize(&s),
        other => {
            return Err(ProtocolError::InvalidScore(format!(
                "name must be a string, got {}",
                kind_of(&other)
            )))
        }
    };
    let time = parse_time(&time)?;

    let record = ScoreRecord::new(category, time, now).with_extra(fields);
    debug!(category = record.category(), time = time.seconds(), "submission decoded");
    Ok(record)
}

fn parse_time(value: &Value) -> ProtocolResult<RunTime> {
    let seconds = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| ProtocolError::InvalidScore(format!("time is not a number: {value}")))?;

    RunTime::new(seconds).map_err(|e| ProtocolError::InvalidScore(e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
