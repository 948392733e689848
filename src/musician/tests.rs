//! Musician Module Tests
//!
//! Announcements are captured on a plain loopback socket standing in for the group.

#[cfg(test)]
mod tests {
    use crate::config::MusicianConfig;
    use crate::musician::service::Musician;
    use crate::protocol::instrument::Instrument;
    use crate::protocol::types::Announcement;
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio::net::UdpSocket;
    use tokio::time::timeout;

    async fn capture_socket() -> (UdpSocket, SocketAddr) {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        (socket, addr)
    }

    async fn recv_announcement(socket: &UdpSocket) -> Announcement {
        let mut buf = vec![0u8; 2048];
        let (len, _) = timeout(Duration::from_secs(2), socket.recv_from(&mut buf))
            .await
            .expect("announcement should arrive")
            .unwrap();
        Announcement::decode(&buf[..len]).expect("announcement should decode")
    }

    fn config_for(target: SocketAddr, period: Duration) -> MusicianConfig {
        MusicianConfig {
            target,
            period,
            ..MusicianConfig::default()
        }
    }

    #[tokio::test]
    async fn test_announcement_carries_identity_and_sound() {
        let (capture, addr) = capture_socket().await;
        let musician = Musician::new(Instrument::Violin, config_for(addr, Duration::from_secs(1)))
            .await
            .unwrap();

        musician.announce_once().await.unwrap();
        let received = recv_announcement(&capture).await;

        assert_eq!(received.identity, musician.id);
        assert_eq!(received.payload.instrument, "violin");
        assert_eq!(received.payload.sound, "gzi-gzi");
    }

    #[tokio::test]
    async fn test_identity_is_stable_across_ticks() {
        let (capture, addr) = capture_socket().await;
        let musician = Musician::new(Instrument::Drum, config_for(addr, Duration::from_millis(20)))
            .await
            .unwrap();

        let player = tokio::spawn(musician.clone().play());

        let first = recv_announcement(&capture).await;
        let second = recv_announcement(&capture).await;
        let third = recv_announcement(&capture).await;
        player.abort();

        assert_eq!(first.identity, musician.id);
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[tokio::test]
    async fn test_two_musicians_have_distinct_identities() {
        let (_capture, addr) = capture_socket().await;
        let config = config_for(addr, Duration::from_secs(1));

        let a = Musician::new(Instrument::Piano, config.clone()).await.unwrap();
        let b = Musician::new(Instrument::Piano, config).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.announcement().payload, b.announcement().payload);
    }

    #[tokio::test]
    async fn test_zero_period_is_rejected() {
        let (_capture, addr) = capture_socket().await;
        let result = Musician::new(Instrument::Flute, config_for(addr, Duration::ZERO)).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_send_failures_do_not_stop_the_schedule() {
        // Broadcast without SO_BROADCAST is refused by the kernel on every send.
        let target: SocketAddr = "255.255.255.255:2205".parse().unwrap();
        let config = config_for(target, Duration::from_millis(10));
        let musician = Musician::new(Instrument::Piano, config).await.unwrap();

        assert!(musician.announce_once().await.is_err());

        let player = tokio::spawn(musician.clone().play());
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(!player.is_finished(), "play must keep ticking after failed sends");
        player.abort();
    }
}
