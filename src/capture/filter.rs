//! Channel selection.
//!
//! Matching is literal string equality. OSC address patterns (`*`, `?`,
//! `[...]`, `{...}`) and hierarchy are not interpreted.

/// Returns true when `address` is exactly `channel`.
pub fn matches(channel: &str, address: &str) -> bool {
    channel == address
}

/// The set of channel names a recorder captures.
#[derive(Debug, Clone)]
pub struct ChannelFilter {
    channels: Vec<String>,
}

impl ChannelFilter {
    pub fn new<I, S>(channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            channels: channels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Configured channels equal to `address`, in configuration order.
    ///
    /// A channel listed twice yields two matches.
    pub fn matching<'a>(&'a self, address: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.channels
            .iter()
            .map(String::as_str)
            .filter(move |channel| matches(channel, address))
    }
}
