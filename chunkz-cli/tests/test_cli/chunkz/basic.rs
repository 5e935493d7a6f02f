use crate::add_test;
use crate::common::{generate_random_data, Fixture, BINARY_DATA, SAMPLE_TEXT};
use crate::{KB, MB};

// Test basic compression and decompression
add_test!(compress_decompress, async {
    let data = SAMPLE_TEXT.as_bytes();
    let fixture = Fixture::with_file("input.txt", data);

    let output = fixture
        .run(&[
            "compress",
            &fixture.path("input.txt"),
            &fixture.path("input.cz"),
        ])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(fixture.file_exists("input.cz"));
    assert_ne!(fixture.read_file("input.cz"), data);

    let output = fixture
        .run(&[
            "decompress",
            &fixture.path("input.cz"),
            &fixture.path("restored.txt"),
        ])
        .await;
    assert!(output.status.success(), "{}", output.stderr);

    fixture.assert_files(&["input.txt", "restored.txt"], &[data, data]);
});

// Binary data survives the round trip unchanged
add_test!(binary_roundtrip, async {
    let fixture = Fixture::with_file("data.bin", BINARY_DATA);

    let output = fixture
        .run(&[
            "compress",
            &fixture.path("data.bin"),
            &fixture.path("data.cz"),
        ])
        .await;
    assert!(output.status.success());

    let output = fixture
        .run(&[
            "decompress",
            &fixture.path("data.cz"),
            &fixture.path("data.out"),
        ])
        .await;
    assert!(output.status.success());
    fixture.assert_files(&["data.out"], &[BINARY_DATA]);
});

// A multi-chunk file is split into one frame per chunk
add_test!(large_file_is_chunked, async {
    let data = generate_random_data(MB);
    let fixture = Fixture::with_file("large.bin", &data);

    let output = fixture
        .run(&[
            "compress",
            "-s",
            "64K",
            "-T",
            "4",
            &fixture.path("large.bin"),
            &fixture.path("large.cz"),
        ])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(output.stderr.contains("16 chunks"), "{}", output.stderr);

    let output = fixture.run(&["list", &fixture.path("large.cz")]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("16 frames"), "{}", output.stdout);

    let output = fixture
        .run(&[
            "decompress",
            "-T",
            "2",
            &fixture.path("large.cz"),
            &fixture.path("large.out"),
        ])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    fixture.assert_files(&["large.out"], &[&data]);
});

// The archive does not depend on how many workers produced it
add_test!(archive_independent_of_workers, async {
    let data = generate_random_data(200 * KB);
    let fixture = Fixture::with_file("input.bin", &data);

    for (threads, name) in [("1", "one.cz"), ("3", "three.cz"), ("8", "eight.cz")] {
        let output = fixture
            .run(&[
                "compress",
                "-s",
                "7K",
                "-T",
                threads,
                &fixture.path("input.bin"),
                &fixture.path(name),
            ])
            .await;
        assert!(output.status.success(), "{}", output.stderr);
    }

    let reference = fixture.read_file("one.cz");
    assert!(!reference.is_empty());
    assert_eq!(fixture.read_file("three.cz"), reference);
    assert_eq!(fixture.read_file("eight.cz"), reference);
});

// The summary line reports what was done
add_test!(summary_is_printed, async {
    let fixture = Fixture::with_file("input.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run(&[
            "compress",
            "-T",
            "2",
            &fixture.path("input.txt"),
            &fixture.path("input.cz"),
        ])
        .await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.starts_with("chunkz: compressed 43 B -> "));
    assert!(output.stderr.contains("1 chunks, 2 workers"));
});

// Listing prints one row per frame starting at offset zero
add_test!(list_frames, async {
    let data = generate_random_data(10 * KB);
    let fixture = Fixture::with_file("input.bin", &data);

    let output = fixture
        .run(&[
            "compress",
            "-s",
            "4K",
            &fixture.path("input.bin"),
            &fixture.path("input.cz"),
        ])
        .await;
    assert!(output.status.success());

    let output = fixture.run(&["list", &fixture.path("input.cz")]).await;
    assert!(output.status.success());

    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(lines.len(), 5, "{}", output.stdout);
    assert!(lines[1].trim_start().starts_with("0 "));
    assert!(lines[4].starts_with("3 frames"));
});
