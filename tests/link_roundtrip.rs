use baseband_rs::channel::apply_noise;
use baseband_rs::metrics::bit_error_rate;
use baseband_rs::modulation::{Bpsk, Modulation, Qpsk, average_energy};
use baseband_rs::phy::{LineCode, Manchester, hard_decision};
use baseband_rs::simulation::random_bits;
use baseband_rs::text::{bits_from_text, text_from_bits};
use baseband_rs::LinkError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn text_round_trip_for_ascii() {
    let mut rng = StdRng::seed_from_u64(100);
    for _ in 0..50 {
        let len = rng.random_range(0..64);
        let text: String = (0..len)
            .map(|_| char::from(rng.random_range(0u8..128)))
            .collect();
        let bits = bits_from_text(&text).unwrap();
        assert_eq!(text_from_bits(&bits).unwrap(), text);
    }
}

#[test]
fn noiseless_round_trips() {
    let mut rng = StdRng::seed_from_u64(101);
    for len in [0, 1, 2, 7, 64, 1001] {
        let bits = random_bits(len, &mut rng);

        let levels = Manchester.encode(&bits).unwrap();
        assert_eq!(levels.len(), 2 * len);
        assert_eq!(Manchester.decode(&levels).unwrap(), bits);

        let symbols = Bpsk.modulate(&bits).unwrap();
        assert_eq!(Bpsk.demodulate(&symbols), bits);

        if len % 2 == 0 {
            let symbols = Qpsk.modulate(&bits).unwrap();
            assert_eq!(symbols.len(), len / 2);
            assert_eq!(Qpsk.demodulate(&symbols), bits);
        } else {
            assert!(matches!(
                Qpsk.modulate(&bits),
                Err(LinkError::OddLength { .. })
            ));
        }
    }
}

#[test]
fn modulators_have_unit_average_energy() {
    let mut rng = StdRng::seed_from_u64(102);
    let bits = random_bits(2048, &mut rng);
    let bpsk = Bpsk.modulate(&bits).unwrap();
    let qpsk = Qpsk.modulate(&bits).unwrap();
    assert!((average_energy(&bpsk) - 1.0).abs() < 1e-12);
    assert!((average_energy(&qpsk) - 1.0).abs() < 1e-12);
}

#[test]
fn manchester_text_through_clean_channel() {
    let mut rng = StdRng::seed_from_u64(103);
    let message = "Rust makes baseband links fun!";
    let bits = bits_from_text(message).unwrap();
    let levels = Manchester.encode(&bits).unwrap();
    let noisy = apply_noise(&levels, 60.0, &mut rng);

    let decoded = Manchester.decode(&hard_decision(&noisy)).unwrap();
    assert_eq!(bit_error_rate(&bits, &decoded).unwrap(), 0.0);
    assert_eq!(text_from_bits(&decoded).unwrap(), message);
}

#[test]
fn manchester_mean_rule_on_raw_levels() {
    let mut rng = StdRng::seed_from_u64(105);
    let bits = random_bits(256, &mut rng);
    let levels = Manchester.encode(&bits).unwrap();
    let noisy = apply_noise(&levels, 60.0, &mut rng);

    // valid pairs average to the noise alone, so the sign of the pair mean
    // decides the bit
    let expected: Vec<u8> = noisy
        .chunks_exact(2)
        .map(|pair| u8::from((pair[0] + pair[1]) / 2.0 > 0.0))
        .collect();
    assert_eq!(Manchester.decode(&noisy).unwrap(), expected);

    assert_eq!(Manchester.decode(&[0.4, 0.2, -0.9, 0.1]).unwrap(), vec![1, 0]);
    assert_eq!(Manchester.decode(&[1.0, 1.0, -1.0, -1.0]).unwrap(), vec![1, 0]);
}

#[test]
fn qpsk_and_bpsk_through_noise_keep_lengths() {
    let mut rng = StdRng::seed_from_u64(104);
    let bits = random_bits(1000, &mut rng);

    let rx = Bpsk.demodulate(&apply_noise(&Bpsk.modulate(&bits).unwrap(), 3.0, &mut rng));
    assert_eq!(rx.len(), bits.len());
    assert!(rx.iter().all(|&b| b <= 1));

    let rx = Qpsk.demodulate(&apply_noise(&Qpsk.modulate(&bits).unwrap(), 3.0, &mut rng));
    assert_eq!(rx.len(), bits.len());
    assert!(rx.iter().all(|&b| b <= 1));
}

#[test]
fn invalid_inputs_fail_fast() {
    assert_eq!(
        Bpsk.modulate(&[1, 2]).unwrap_err(),
        LinkError::InvalidBit { position: 1, value: 2 }
    );
    assert_eq!(
        Manchester.encode(&[3]).unwrap_err(),
        LinkError::InvalidBit { position: 0, value: 3 }
    );
    assert_eq!(
        Manchester.decode(&[1.0]).unwrap_err(),
        LinkError::InvalidLength { len: 1, multiple: 2 }
    );
    assert_eq!(
        text_from_bits(&[1; 12]).unwrap_err(),
        LinkError::InvalidLength { len: 12, multiple: 8 }
    );
    assert_eq!(
        bit_error_rate(&[0, 1], &[0]).unwrap_err(),
        LinkError::LengthMismatch { tx: 2, rx: 1 }
    );
}
