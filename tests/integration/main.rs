//! End-to-end tests of the client against spy transports and mock HTTP servers.

mod callbacks;
mod errors;
mod message;
mod mock_server;
mod requests;
mod spy_transport;
mod workspaces;
