//! Blocking client
//!
//! Sends commands over one TCP connection and reads the responses.

use std::io::{BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};

use crate::error::{DuoError, Result};
use crate::protocol::{read_response, write_command, Command, Reply, Response, Status};

/// Client for a DuoKV server
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl Client {
    /// Connect to `addr`
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;
        let reader = BufReader::new(stream.try_clone()?);
        let writer = BufWriter::new(stream);
        Ok(Self { reader, writer })
    }

    /// Send a command and return the raw response
    pub fn call(&mut self, command: &Command) -> Result<Response> {
        write_command(&mut self.writer, command)?;
        read_response(&mut self.reader)
    }

    /// Send a command and decode its reply.
    ///
    /// A NOT_FOUND status becomes `DuoError::NotFound`; any other failure
    /// becomes `DuoError::Server` carrying the server's message.
    pub fn execute(&mut self, command: &Command) -> Result<Reply> {
        let response = self.call(command)?;
        let message = response.message().unwrap_or_default();
        match response.status {
            Status::Ok => response.reply(),
            Status::NotFound => Err(DuoError::NotFound(message)),
            status => Err(DuoError::Server {
                status: format!("{:?}", status),
                message,
            }),
        }
    }

    pub fn ping(&mut self) -> Result<()> {
        match self.execute(&Command::Ping)? {
            Reply::Pong => Ok(()),
            other => Err(DuoError::Protocol(format!("Expected PONG, got {:?}", other))),
        }
    }
}
