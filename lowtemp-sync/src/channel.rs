//! Message channel abstraction.
//!
//! The transport itself (socket lifecycle, reconnection) lives outside
//! this crate. The controller only needs to know whether the channel is
//! currently open and how to send a text frame; inbound frames are
//! delivered by the host calling
//! [`SettingsController::handle_frame`](crate::SettingsController::handle_frame).

use crate::error::SyncResult;
use async_trait::async_trait;

/// A bidirectional text-frame channel to the remote counterpart.
#[async_trait]
pub trait MessageChannel: Send + Sync {
    /// Whether frames can currently be sent.
    fn is_open(&self) -> bool;

    /// Sends a text frame. Fire-and-forget: the controller never queues
    /// or retries a failed send.
    async fn send(&self, frame: &str) -> SyncResult<()>;
}

/// A mock channel for testing.
pub mod mock {
    use super::*;
    use crate::error::SyncError;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Records sent frames; the open state is toggled by the test.
    #[derive(Debug, Default)]
    pub struct MockChannel {
        open: Mutex<bool>,
        sent: Mutex<VecDeque<String>>,
    }

    impl MockChannel {
        /// Creates a channel in the open state.
        pub fn open() -> Self {
            Self {
                open: Mutex::new(true),
                sent: Mutex::new(VecDeque::new()),
            }
        }

        /// Creates a channel in the closed state.
        pub fn closed() -> Self {
            Self::default()
        }

        /// Opens or closes the channel.
        pub fn set_open(&self, open: bool) {
            *self.open.lock().unwrap() = open;
        }

        /// Takes the next sent frame, oldest first.
        pub fn take_sent(&self) -> Option<String> {
            self.sent.lock().unwrap().pop_front()
        }

        /// Number of frames sent so far.
        pub fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MessageChannel for MockChannel {
        fn is_open(&self) -> bool {
            *self.open.lock().unwrap()
        }

        async fn send(&self, frame: &str) -> SyncResult<()> {
            if !self.is_open() {
                return Err(SyncError::Channel("not connected".into()));
            }
            self.sent.lock().unwrap().push_back(frame.to_string());
            Ok(())
        }
    }
}
