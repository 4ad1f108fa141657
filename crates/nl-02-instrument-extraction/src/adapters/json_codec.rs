use crate::domain::{Message, ParseError, PaymentInstrument};
use crate::ports::{InstrumentParser, MessageParser};

/// JSON codec for the message embedded in encrypted notices.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonMessageParser;

impl JsonMessageParser {
    /// Serialize a message into a reference string.
    pub fn encode(message: &Message) -> Result<String, ParseError> {
        Ok(serde_json::to_string(message)?)
    }
}

impl MessageParser for JsonMessageParser {
    fn parse(&self, reference: &str) -> Result<Message, ParseError> {
        if reference.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(serde_json::from_str(reference)?)
    }
}

/// JSON codec for payment instruments.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonInstrumentParser;

impl JsonInstrumentParser {
    /// Serialize an instrument as sealed cleartext or a notice body.
    pub fn encode(instrument: &PaymentInstrument) -> Result<Vec<u8>, ParseError> {
        Ok(serde_json::to_vec(instrument)?)
    }

    /// `encode` as a string, for notice references.
    pub fn encode_string(instrument: &PaymentInstrument) -> Result<String, ParseError> {
        Ok(serde_json::to_string(instrument)?)
    }
}

impl InstrumentParser for JsonInstrumentParser {
    fn parse(&self, bytes: &[u8]) -> Result<PaymentInstrument, ParseError> {
        if bytes.is_empty() {
            return Err(ParseError::Empty);
        }
        let text = std::str::from_utf8(bytes).map_err(|_| ParseError::Utf8)?;
        Ok(serde_json::from_str(text)?)
    }
}
