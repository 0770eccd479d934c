use tokio::sync::mpsc::UnboundedSender;

use crate::{Connection, Signal, delegate::Delegate, error::DelegateError};

/// Delegate forwarding each payload into a tokio unbounded channel.
///
/// Sends to a closed channel are dropped silently.
pub struct ChannelDelegate<A> {
    sender: UnboundedSender<A>,
}

impl<A> ChannelDelegate<A> {
    pub fn new(sender: UnboundedSender<A>) -> Self { Self { sender } }
}

impl<A> Delegate<A> for ChannelDelegate<A> {
    fn try_invoke(&self, args: A) -> Result<(), DelegateError> {
        if self.sender.send(args).is_err() {
            tracing::trace!("channel closed, dropping payload");
        }
        Ok(())
    }
}

/// Connect `signal` to a channel, so each emission is queued for an async consumer
pub fn connect_channel<A: 'static>(signal: &Signal<A>, sender: UnboundedSender<A>) -> Connection<A> {
    Connection::with_delegate(signal, Box::new(ChannelDelegate::new(sender)))
}
