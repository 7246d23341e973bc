//! Doubles for the AT transport, the delay provider and the driver seam.
use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use atat::{blocking::AtatClient, AtatCmd, InternalError};
use embedded_hal::delay::DelayNs;

use crate::command::network_service::responses::Statistics;
use crate::command::network_service::types::StatisticsType;
use crate::driver::{
    CoapRequest, CoapResponse, Command, ConnectionStatus, Driver, DriverIdentity, Reply,
};

/// Canned outcome of one AT exchange.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Final result `OK`, preceded by the given information text
    Ok(&'static str),
    /// Final result `ERROR`
    Error,
    Timeout,
}

/// Records every written command and answers from a queue.
///
/// An exhausted queue answers a bare `OK`.
#[derive(Debug, Default)]
pub struct MockAtClient {
    pub sent: Vec<String>,
    responses: VecDeque<MockResponse>,
}

impl MockAtClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, response: MockResponse) -> Self {
        self.responses.push_back(response);
        self
    }
}

impl AtatClient for MockAtClient {
    fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        let mut buf = std::vec![0u8; Cmd::MAX_LEN];
        let len = cmd.write(&mut buf);
        self.sent
            .push(String::from_utf8_lossy(&buf[..len]).into_owned());

        match self.responses.pop_front().unwrap_or(MockResponse::Ok("")) {
            MockResponse::Ok(text) => cmd.parse(Ok(text.as_bytes())),
            MockResponse::Error => cmd.parse(Err(InternalError::Error)),
            MockResponse::Timeout => cmd.parse(Err(InternalError::Timeout)),
        }
    }
}

#[derive(Debug, Default)]
pub struct MockDelay {
    pub waited_ns: u64,
}

impl MockDelay {
    pub fn waited_ms(&self) -> u64 {
        self.waited_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waited_ns += u64::from(ns);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Driver double recording every call as its `Debug` form.
///
/// Commands are answered from `replies`, falling back to [`Reply::Ack`].
/// Queries answer with the matching field, or fail when it is `None`.
#[derive(Debug)]
pub struct MockDriver {
    pub identity: DriverIdentity,
    pub calls: Vec<String>,
    pub replies: VecDeque<Result<Reply, MockError>>,
    pub registration: Option<ConnectionStatus>,
    pub stats: Option<Statistics>,
    pub coap: Option<CoapResponse>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::with_identity(DriverIdentity::SaraN2)
    }

    pub fn with_identity(identity: DriverIdentity) -> Self {
        Self {
            identity,
            calls: Vec::new(),
            replies: VecDeque::new(),
            registration: None,
            stats: None,
            coap: None,
        }
    }

    pub fn reply(mut self, reply: Result<Reply, MockError>) -> Self {
        self.replies.push_back(reply);
        self
    }
}

impl Driver for MockDriver {
    type Error = MockError;

    fn identity(&self) -> DriverIdentity {
        self.identity
    }

    fn send_command(&mut self, command: &Command<'_>) -> Result<Reply, Self::Error> {
        self.calls.push(std::format!("{:?}", command));
        self.replies.pop_front().unwrap_or(Ok(Reply::Ack))
    }

    fn query_registration(&mut self) -> Result<ConnectionStatus, Self::Error> {
        self.calls.push(String::from("query_registration"));
        self.registration.ok_or(MockError)
    }

    fn query_stats(&mut self, kind: StatisticsType) -> Result<Statistics, Self::Error> {
        self.calls.push(std::format!("query_stats({:?})", kind));
        self.stats.clone().ok_or(MockError)
    }

    fn transfer_coap(&mut self, request: &CoapRequest<'_>) -> Result<CoapResponse, Self::Error> {
        self.calls.push(std::format!("{:?}", request));
        self.coap.clone().ok_or(MockError)
    }
}
