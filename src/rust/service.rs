//! Single-connection TCP front end for the classifier.
//!
//! Framing is one newline-terminated UTF-8 message per connection. The
//! server answers with the label followed by a newline and closes.

use std::io;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};

use crate::classifier::{Classifier, ClassifierError, Label, LabelScores};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Classification failed: {0}")]
    Classification(#[from] ClassifierError),
    #[error("Connection closed before a message was received")]
    EmptyMessage,
    #[error("Unexpected reply from server: {0:?}")]
    InvalidReply(String),
}

/// Outcome of classifying one received message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub message: String,
    pub label: Label,
    pub scores: LabelScores,
}

/// Accepts one connection, classifies the line it sends and replies with the label
pub async fn serve_once(listener: &TcpListener, classifier: &Classifier) -> Result<Classification, ServiceError> {
    let (stream, peer) = listener.accept().await?;
    log::info!("Accepted connection from {}", peer);
    handle_connection(stream, classifier).await
}

async fn handle_connection(stream: TcpStream, classifier: &Classifier) -> Result<Classification, ServiceError> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);

    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Err(ServiceError::EmptyMessage);
    }
    let message = line.trim_end_matches(['\r', '\n']).to_string();
    log::info!("Received message: {}", message);

    let scores = classifier.scores(&message)?;
    let label = scores.best();
    log::info!("Message classified as {}", label);

    writer.write_all(format!("{}\n", label).as_bytes()).await?;
    writer.shutdown().await?;

    Ok(Classification { message, label, scores })
}

/// Sends one message to a running service and returns the label it replies with
pub async fn send_message<A: ToSocketAddrs>(addr: A, message: &str) -> Result<Label, ServiceError> {
    let stream = TcpStream::connect(addr).await?;
    let (reader, mut writer) = stream.into_split();

    let message = message.trim_end_matches(['\r', '\n']);
    writer.write_all(format!("{}\n", message).as_bytes()).await?;
    writer.flush().await?;

    let mut reply = String::new();
    BufReader::new(reader).read_line(&mut reply).await?;
    reply
        .trim()
        .parse()
        .map_err(|_| ServiceError::InvalidReply(reply.trim().to_string()))
}
