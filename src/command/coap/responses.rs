//! Responses for CoAP Commands
use super::MAX_PAYLOAD_LEN;
use atat::atat_derive::AtatResp;
use heapless::String;

/// 13.2 CoAP command +UCOAPC
///
/// `code` is the response code sent by the CoAP server.
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
pub struct CoapCommandResponse {
    #[at_arg(position = 0)]
    pub code: u16,
    #[at_arg(position = 1)]
    pub payload: Option<String<MAX_PAYLOAD_LEN>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::coap::types::{CoapMethod, ContentFormat};
    use crate::command::coap::CoapPayloadCommand;
    use atat::serde_at::de::from_str;
    use atat::AtatCmd;

    #[test]
    fn deserialize_coap_response() {
        let resp: CoapCommandResponse = from_str("+UCOAPCD: 205,\"hello\"\r\n").unwrap();
        assert_eq!(resp.code, 205);
        assert_eq!(resp.payload.as_deref(), Some("hello"));

        let resp: CoapCommandResponse = from_str("+UCOAPCD: 404").unwrap();
        assert_eq!(resp.code, 404);
        assert_eq!(resp.payload, None);
    }

    #[test]
    fn write_payload_command() {
        let mut buf = [0u8; 600];
        let cmd = CoapPayloadCommand {
            method: CoapMethod::Put,
            payload: "21.5",
            format: ContentFormat::TextPlain,
        };
        let len = cmd.write(&mut buf);
        assert_eq!(&buf[..len], b"AT+UCOAPC=3,\"21.5\",0\r\n");
    }
}
