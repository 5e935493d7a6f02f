use crate::add_test;
use crate::common::{framed, Fixture, SAMPLE_TEXT};

// An empty input compresses to an empty archive and back
add_test!(empty_file, async {
    let fixture = Fixture::with_file("empty.txt", b"");

    let output = fixture
        .run(&[
            "compress",
            &fixture.path("empty.txt"),
            &fixture.path("empty.cz"),
        ])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(fixture.file_exists("empty.cz"));
    assert!(fixture.read_file("empty.cz").is_empty());

    let output = fixture
        .run(&[
            "decompress",
            &fixture.path("empty.cz"),
            &fixture.path("empty.out"),
        ])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(fixture.file_exists("empty.out"));
    assert!(fixture.read_file("empty.out").is_empty());
});

// A missing input is reported and no output is created
add_test!(missing_input, async {
    let fixture = Fixture::new();

    let output = fixture
        .run(&[
            "compress",
            &fixture.path("missing.txt"),
            &fixture.path("missing.cz"),
        ])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("missing.txt"), "{}", output.stderr);
    assert!(!fixture.file_exists("missing.cz"));
});

// Writing the output over the input is refused even with --force
add_test!(same_file_refused, async {
    let data = SAMPLE_TEXT.as_bytes();
    let fixture = Fixture::with_file("input.txt", data);

    let output = fixture
        .run(&[
            "compress",
            "-f",
            &fixture.path("input.txt"),
            &fixture.path("input.txt"),
        ])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("same file"), "{}", output.stderr);
    fixture.assert_files(&["input.txt"], &[data]);
});

// A header cut short after the last frame is corruption, not end of input
add_test!(truncated_header, async {
    let fixture = Fixture::with_file("input.txt", SAMPLE_TEXT.as_bytes());
    let output = fixture
        .run(&[
            "compress",
            &fixture.path("input.txt"),
            &fixture.path("input.cz"),
        ])
        .await;
    assert!(output.status.success());

    let mut archive = fixture.read_file("input.cz");
    archive.extend_from_slice(&[7, 0, 0]);
    fixture.write_file("broken.cz", &archive);

    let output = fixture
        .run(&[
            "decompress",
            &fixture.path("broken.cz"),
            &fixture.path("broken.out"),
        ])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("corrupt chunk #1"), "{}", output.stderr);
    assert!(output.stderr.contains("truncated length header"));

    let output = fixture.run(&["list", &fixture.path("broken.cz")]).await;
    assert!(!output.status.success());
});

// A payload shorter than its header declares is rejected
add_test!(truncated_payload, async {
    let fixture = Fixture::with_file("input.txt", SAMPLE_TEXT.as_bytes());
    let output = fixture
        .run(&[
            "compress",
            &fixture.path("input.txt"),
            &fixture.path("input.cz"),
        ])
        .await;
    assert!(output.status.success());

    let mut archive = fixture.read_file("input.cz");
    archive.truncate(archive.len() - 5);
    fixture.write_file("short.cz", &archive);

    let output = fixture
        .run(&[
            "decompress",
            &fixture.path("short.cz"),
            &fixture.path("short.out"),
        ])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("truncated payload"), "{}", output.stderr);
});

add_test!(zero_length_frame, async {
    let fixture = Fixture::with_file("zero.cz", &0u64.to_le_bytes());

    let output = fixture
        .run(&[
            "decompress",
            &fixture.path("zero.cz"),
            &fixture.path("zero.out"),
        ])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("zero-length"), "{}", output.stderr);
});

// A well-framed payload that is not gzip data fails to decode
add_test!(garbage_payload, async {
    let fixture = Fixture::with_file("garbage.cz", &framed(&[b"definitely not gzip"]));

    let output = fixture
        .run(&[
            "decompress",
            &fixture.path("garbage.cz"),
            &fixture.path("garbage.out"),
        ])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("corrupt chunk #0"), "{}", output.stderr);

    // The framing itself is intact, so listing still works
    let output = fixture.run(&["list", &fixture.path("garbage.cz")]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("1 frames"));
});

// Plain data fed to the decompressor is rejected
add_test!(decompress_plain_file, async {
    let fixture = Fixture::with_file("plain.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run(&[
            "decompress",
            &fixture.path("plain.txt"),
            &fixture.path("plain.out"),
        ])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("corrupt chunk #0"), "{}", output.stderr);
});
