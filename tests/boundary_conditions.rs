mod common;

use common::{insert_bytes, noise, scan, urls, write_input};
use mediasift::constants::MIN_OVERLAP;

const OVERLAP: usize = 256;

const SAMPLE_URLS: [&[u8]; 4] = [
    b"https://cdn.example.com/img/boundary_a.png?ver=7",
    b"http://www.example.org/media/clip-01.mp4",
    b"HTTPS://Assets.Example.net/bg/launcher%20bg.webp#frag",
    b"https://example.com/path/to/document",
];

/// Noise with each sample URL written across a multiple of `block_size`.
fn straddling_input(block_size: usize) -> Vec<u8> {
    let mut data = noise(block_size * (SAMPLE_URLS.len() + 2));
    for (i, url) in SAMPLE_URLS.iter().enumerate() {
        let boundary = block_size * (i + 1);
        let offset = boundary - url.len() / 2;
        insert_bytes(&mut data, offset, url);
    }
    data
}

#[test]
fn straddling_urls_match_single_pass() {
    let dir = tempfile::tempdir().expect("tempdir");
    for block_size in [97usize, 128, 1000, 4096] {
        let data = straddling_input(block_size);
        let path = write_input(dir.path(), &format!("straddle_{block_size}"), &data);

        let chunked = scan(&[path.clone()], block_size, OVERLAP);
        let whole = scan(&[path], data.len(), OVERLAP);

        assert_eq!(
            urls(&chunked.results),
            urls(&whole.results),
            "block_size={block_size}"
        );
        assert_eq!(chunked.results.len(), SAMPLE_URLS.len());
        assert_eq!(
            chunked.stats.candidates, whole.stats.candidates,
            "a straddling url was reported twice or lost, block_size={block_size}"
        );
        assert!(chunked.stats.blocks > whole.stats.blocks);
    }
}

#[test]
fn url_ending_exactly_at_boundary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let block_size = 512usize;
    let url = b"https://cdn.example.com/exact/end.gif";
    let mut data = noise(block_size * 3);
    insert_bytes(&mut data, block_size - url.len(), url);
    insert_bytes(&mut data, block_size * 2, url);
    let path = write_input(dir.path(), "exact", &data);

    let out = scan(&[path], block_size, OVERLAP);
    assert_eq!(urls(&out.results), vec![String::from_utf8_lossy(url).into_owned()]);
    assert_eq!(out.stats.candidates, 2);
}

#[test]
fn url_at_end_of_file_is_kept() {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = b"https://cdn.example.com/tail/last.mkv";
    let mut data = noise(1000);
    data.extend_from_slice(url);
    let path = write_input(dir.path(), "tail", &data);

    let out = scan(&[path], 64, 128);
    assert_eq!(urls(&out.results), vec![String::from_utf8_lossy(url).into_owned()]);
}

#[test]
fn invalid_utf8_around_urls_is_tolerated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut data = vec![0xff, 0xfe, 0xc3];
    data.extend_from_slice(b"https://cdn.example.com/a.jpeg");
    data.extend_from_slice(&[0xe2, 0x82]);
    data.extend_from_slice(b"https://cdn.example.com/b.bmp");
    data.push(0xc0);
    let path = write_input(dir.path(), "garbled", &data);

    let out = scan(&[path], 8, 64);
    assert_eq!(
        urls(&out.results),
        vec![
            "https://cdn.example.com/a.jpeg".to_string(),
            "https://cdn.example.com/b.bmp".to_string()
        ]
    );
}

#[test]
fn minimum_overlap_keeps_longest_url_head() {
    let dir = tempfile::tempdir().expect("tempdir");
    let block_size = 1024usize;
    // Host head close to the pattern's 256-character limit, in DNS-sized labels.
    let host = (0..4).map(|_| "a".repeat(60)).collect::<Vec<_>>().join(".");
    let url = format!("https://www.{host}.com/img/boundary_a.png?ver=7");
    let mut data = noise(block_size * 4);
    insert_bytes(&mut data, block_size - 20, url.as_bytes());
    insert_bytes(&mut data, block_size * 2 - url.len() + 5, url.as_bytes());
    let path = write_input(dir.path(), "long_head", &data);

    let split = scan(&[path.clone()], block_size, MIN_OVERLAP);
    let whole = scan(&[path], data.len(), MIN_OVERLAP);
    assert_eq!(urls(&whole.results), vec![url]);
    assert_eq!(urls(&split.results), urls(&whole.results));
    assert_eq!(split.stats.candidates, 2);
}
