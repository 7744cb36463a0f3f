//! WAV framing integration tests
//!
//! Verifies the byte-exact container contract and round-trips the output
//! through an independent standard-compliant decoder.

use std::io::Cursor;

use base64::Engine;

use aria_gateway::audio::{encode_wav, encode_wav_base64, wav_data_uri, PcmFormat, WAV_HEADER_LEN};

/// Generate a PCM payload of interleaved 16-bit LE samples.
fn generate_pcm16(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}

fn u32_at(wav: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(wav[offset..offset + 4].try_into().unwrap())
}

fn u16_at(wav: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes(wav[offset..offset + 2].try_into().unwrap())
}

#[test]
fn test_output_length_is_header_plus_payload() {
    let format = PcmFormat::default();
    for len in [0usize, 1, 2, 3, 4, 100, 4096, 48_000] {
        let pcm = vec![0x5a; len];
        assert_eq!(encode_wav(&format, &pcm).len(), WAV_HEADER_LEN + len);
    }
}

#[test]
fn test_magic_bytes_at_fixed_offsets() {
    let pcm = generate_pcm16(&[100, -100, 3000]);
    let wav = encode_wav(&PcmFormat::default(), &pcm);

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(&wav[36..40], b"data");
}

#[test]
fn test_size_fields() {
    let pcm = vec![0u8; 1000];
    let wav = encode_wav(&PcmFormat::default(), &pcm);

    // RIFF size = total file size minus 8
    assert_eq!(u32_at(&wav, 4), (wav.len() - 8) as u32);
    // data subchunk size = payload length
    assert_eq!(u32_at(&wav, 40), pcm.len() as u32);
    // fmt subchunk size = 16, audio format = 1 (PCM)
    assert_eq!(u32_at(&wav, 16), 16);
    assert_eq!(u16_at(&wav, 20), 1);
}

#[test]
fn test_format_fields_for_parameter_combinations() {
    for channels in [1u16, 2, 6] {
        for sample_rate in [8_000u32, 16_000, 24_000, 44_100, 48_000] {
            for sample_width in [1u16, 2, 3, 4] {
                let format = PcmFormat {
                    channels,
                    sample_rate,
                    sample_width,
                };
                let wav = encode_wav(&format, &[0u8; 12]);

                assert_eq!(u16_at(&wav, 22), channels);
                assert_eq!(u32_at(&wav, 24), sample_rate);
                assert_eq!(
                    u32_at(&wav, 28),
                    sample_rate * u32::from(channels) * u32::from(sample_width),
                    "byte rate for {channels}ch/{sample_rate}Hz/{sample_width}B"
                );
                assert_eq!(u16_at(&wav, 32), channels * sample_width);
                assert_eq!(u16_at(&wav, 34), sample_width * 8);
            }
        }
    }
}

#[test]
fn test_empty_payload_yields_bare_header() {
    let wav = encode_wav(&PcmFormat::default(), &[]);

    assert_eq!(wav.len(), WAV_HEADER_LEN);
    assert_eq!(u32_at(&wav, 4), 36);
    assert_eq!(u32_at(&wav, 40), 0);
}

#[test]
fn test_known_payload_scenario() {
    // 4 payload bytes, mono, 24 kHz, 16-bit
    let pcm = [0x01u8, 0x00, 0x02, 0x00];
    let wav = encode_wav(&PcmFormat::default(), &pcm);

    assert_eq!(wav.len(), 48);
    assert_eq!(u32_at(&wav, 40), 4);
    assert_eq!(&wav[44..48], &pcm);
}

#[test]
fn test_odd_length_payload_is_verbatim() {
    // Not a multiple of the frame size; carried through untouched
    let pcm = [0x01u8, 0x02, 0x03, 0x04, 0x05];
    let wav = encode_wav(&PcmFormat::default(), &pcm);

    assert_eq!(wav.len(), WAV_HEADER_LEN + 5);
    assert_eq!(u32_at(&wav, 40), 5);
    assert_eq!(&wav[44..], &pcm);
}

#[test]
fn test_roundtrip_through_standard_decoder() {
    let samples: Vec<i16> = (0..480).map(|i| (i * 37 % 20_000) - 10_000).map(|s| s as i16).collect();
    let pcm = generate_pcm16(&samples);
    let format = PcmFormat::mono(24_000);
    let wav = encode_wav(&format, &pcm);

    let mut reader = hound::WavReader::new(Cursor::new(wav)).expect("decoder rejected output");
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 24_000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let decoded: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
    assert_eq!(decoded, samples);
}

#[test]
fn test_stereo_roundtrip_through_standard_decoder() {
    let samples: Vec<i16> = vec![1, -1, 32_767, -32_768, 0, 12_345];
    let pcm = generate_pcm16(&samples);
    let format = PcmFormat {
        channels: 2,
        sample_rate: 44_100,
        sample_width: 2,
    };
    let wav = encode_wav(&format, &pcm);

    let mut reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
    assert_eq!(reader.spec().channels, 2);
    assert_eq!(reader.spec().sample_rate, 44_100);

    let decoded: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
    assert_eq!(decoded, samples);
}

#[test]
fn test_base64_and_data_uri_wrap_same_bytes() {
    let pcm = generate_pcm16(&[7, -7, 700]);
    let format = PcmFormat::default();

    let b64 = encode_wav_base64(&format, &pcm);
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(&b64)
        .unwrap();
    assert_eq!(decoded, encode_wav(&format, &pcm));

    let uri = wav_data_uri(&format, &pcm);
    assert_eq!(uri, format!("data:audio/wav;base64,{b64}"));
}
