// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Classification and scoring are total over any string: they must never
//! panic and must keep every score inside its documented range.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;

use docket::classify::SignatureSet;
use docket::metadata::MetadataExtractor;
use docket::relevance::RelevanceScorer;

fn signatures() -> &'static SignatureSet {
    static SET: OnceLock<SignatureSet> = OnceLock::new();
    SET.get_or_init(|| SignatureSet::builtin().unwrap())
}

fn extractor() -> &'static MetadataExtractor {
    static EX: OnceLock<MetadataExtractor> = OnceLock::new();
    EX.get_or_init(|| MetadataExtractor::new().unwrap())
}

fn scorer() -> &'static RelevanceScorer {
    static SC: OnceLock<RelevanceScorer> = OnceLock::new();
    SC.get_or_init(RelevanceScorer::default_table)
}

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let ranked = signatures().classify(&text, "fuzz_input.txt");
    for m in &ranked {
        assert!(m.confidence >= 0.0 && m.confidence <= 100.0);
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }

    let metadata = extractor().extract(&text);
    let relevance = scorer().score(&text, &metadata);
    assert!(relevance.score <= 100);
});
