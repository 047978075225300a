use futures::stream::{SplitSink, SplitStream};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tungstenite::protocol::Message;

pub type WSSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;
pub type WSStream = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;
