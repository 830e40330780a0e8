//! Channel derivation.
//!
//! Channels are derived from a finished device list and never sampled.
//! Empty and single-device lists legitimately produce no channels.

use super::geometry::distance;
use super::types::{Channel, ChannelPolicy, Device};

/// Build channels for `devices` under `policy`.
///
/// * `AllPairs` - one channel per unordered pair `(devices[i], devices[j])`
///   with `i < j`, in creation order.
/// * `TargetCentric` - one channel from the target to every other device,
///   in creation order; empty when no device is the target.
pub fn build_channels(devices: &[Device], policy: ChannelPolicy) -> Vec<Channel> {
    match policy {
        ChannelPolicy::AllPairs => devices
            .iter()
            .enumerate()
            .flat_map(|(i, a)| devices[i + 1..].iter().map(move |b| channel_between(a, b)))
            .collect(),
        ChannelPolicy::TargetCentric => match devices.iter().find(|d| d.is_target) {
            Some(target) => devices
                .iter()
                .filter(|d| d.device_id != target.device_id)
                .map(|d| channel_between(target, d))
                .collect(),
            None => Vec::new(),
        },
    }
}

/// Channel between two devices, recording their current positions.
pub fn channel_between(a: &Device, b: &Device) -> Channel {
    Channel {
        device_a_id: a.device_id,
        device_a_position: a.position,
        device_b_id: b.device_id,
        device_b_position: b.position,
        distance: distance(&a.position, &b.position),
    }
}
