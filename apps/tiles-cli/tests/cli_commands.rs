//! End-to-end tests for the generate / harvest / define jobs
//!
//! Input PDFs are built here with lopdf: one text line per BT/ET block so
//! extracted page text keeps the line structure.

use lopdf::{content::Content, content::Operation, dictionary, Document, Object, Stream};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tiles_cli::{define, generate, harvest, Config, GenerateOptions, LayoutPreset};
use word_harvest::{DefinitionFormat, DefinitionStrategy, PdfExtractor, TextBackend};

// Helper to create a PDF whose pages hold the given lines of text
fn create_text_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut page_ids = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
            ));
            operations.push(Operation::new(
                "Td",
                vec![Object::Integer(72), Object::Integer(720 - 16 * i as i64)],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(
                    line.as_bytes().to_vec(),
                    lopdf::StringFormat::Literal,
                )],
            ));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            lopdf::Dictionary::new(),
            content.encode().unwrap(),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id);
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Count" => page_ids.len() as i64,
        "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

fn write_pdf(dir: &TempDir, name: &str, pages: &[&[&str]]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, create_text_pdf(pages)).unwrap();
    path
}

fn page_count(path: &Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}

fn dictionary_pages() -> Vec<&'static [&'static str]> {
    let first: &[&str] = &[
        "SEVEN LETTER WORDS",
        "MUUMUUS a loose Hawaiian dress [n]",
        "ABCDEFG not reduplicated [n]",
    ];
    let second: &[&str] = &[
        "TOETOES tall grass in New Zealand [n]",
        "MUUMUUS a later, conflicting entry [n]",
    ];
    vec![first, second]
}

#[test]
fn test_generate_sample_grid() {
    let dir = TempDir::new().unwrap();
    let options = GenerateOptions {
        layout: None,
        words: None,
        title: None,
        output: dir.path().join("Reduplicated_Words.pdf"),
    };

    let path = generate(&options, &Config::default()).unwrap();

    assert!(path.is_absolute());
    assert_eq!(page_count(&path), 3);
}

#[test]
fn test_generate_annotated_from_word_file() {
    let dir = TempDir::new().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(
        &words,
        "# four samples\nMUUMUUS,a loose Hawaiian dress\nTOETOES,tall grass in New Zealand\nMAOMAOS\nNEINEIS,a type of goosefish\n",
    )
    .unwrap();

    let options = GenerateOptions {
        layout: Some(LayoutPreset::Annotated),
        words: Some(words),
        title: Some("Four Words".into()),
        output: dir.path().join("annotated.pdf"),
    };

    let path = generate(&options, &Config::default()).unwrap();
    assert_eq!(page_count(&path), 1);
}

#[test]
fn test_generate_rejects_malformed_word_file() {
    let dir = TempDir::new().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(&words, "MUUMUUS\nnot a word\n").unwrap();

    let options = GenerateOptions {
        layout: None,
        words: Some(words),
        title: None,
        output: dir.path().join("out.pdf"),
    };

    let err = generate(&options, &Config::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("Line 2"));
    assert!(!dir.path().join("out.pdf").exists());
}

#[test]
fn test_generate_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let options = GenerateOptions {
        layout: None,
        words: None,
        title: None,
        output: dir.path().join("missing").join("out.pdf"),
    };
    assert!(generate(&options, &Config::default()).is_err());
}

#[test]
fn test_harvest_writes_sorted_reduplicated_words() {
    let dir = TempDir::new().unwrap();
    let pdf = write_pdf(&dir, "sevens.pdf", &dictionary_pages());
    let output = dir.path().join("words.txt");

    harvest(&pdf, &output, &Config::default()).unwrap();

    assert_eq!(fs::read_to_string(output).unwrap(), "MUUMUUS\nTOETOES\n");
}

#[test]
fn test_harvest_missing_pdf_fails() {
    let dir = TempDir::new().unwrap();
    let result = harvest(
        &dir.path().join("nope.pdf"),
        &dir.path().join("words.txt"),
        &Config::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_define_flattened_tuples() {
    let dir = TempDir::new().unwrap();
    let pdf = write_pdf(&dir, "sevens.pdf", &dictionary_pages());
    let output = dir.path().join("definitions.txt");

    define(
        &pdf,
        &output,
        DefinitionStrategy::Flattened,
        DefinitionFormat::Tuples,
        &Config::default(),
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "(\"MUUMUUS\", \"a loose Hawaiian dress\"),\n(\"TOETOES\", \"tall grass in New Zealand\"),\n"
    );
}

#[test]
fn test_define_line_lists_all_sample_words() {
    let dir = TempDir::new().unwrap();
    let page: &[&str] = &["BONBONS n.", "a piece of candy", "ZOOZOOS", "wood pigeons"];
    let pdf = write_pdf(&dir, "sevens.pdf", &[page]);
    let output = dir.path().join("definitions.txt");

    define(
        &pdf,
        &output,
        DefinitionStrategy::Line,
        DefinitionFormat::Quoted,
        &Config::default(),
    )
    .unwrap();

    let text = fs::read_to_string(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 50);
    assert_eq!(lines[0], "\"Definition not found.\",");
    assert_eq!(lines[6], "\"a piece of candy\",");
    assert_eq!(lines[49], "\"wood pigeons\",");
}

fn pdf_extract_config() -> Config {
    let mut config = Config::default();
    config.scan.backend = TextBackend::PdfExtract;
    config
}

#[test]
fn test_backends_agree_on_page_count() {
    let dir = TempDir::new().unwrap();
    let pdf = write_pdf(&dir, "sevens.pdf", &dictionary_pages());

    let lopdf_pages = PdfExtractor::extract_file(&pdf, TextBackend::Lopdf).unwrap();
    let pdf_extract_pages = PdfExtractor::extract_file(&pdf, TextBackend::PdfExtract).unwrap();

    assert_eq!(lopdf_pages.len(), 2);
    assert_eq!(pdf_extract_pages.len(), 2);
    let numbers: Vec<usize> = pdf_extract_pages.iter().map(|p| p.page_number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert!(pdf_extract_pages[1].text.contains("TOETOES"));
    assert!(!pdf_extract_pages[0].text.contains("TOETOES"));
}

#[test]
fn test_define_flattened_stops_at_page_end() {
    let dir = TempDir::new().unwrap();
    let first: &[&str] = &["MUUMUUS a loose Hawaiian dress"];
    let second: &[&str] = &["TOETOES tall grass [n]"];
    let pdf = write_pdf(&dir, "sevens.pdf", &[first, second]);

    for config in [Config::default(), pdf_extract_config()] {
        let output = dir.path().join(format!("{:?}.txt", config.scan.backend));
        define(
            &pdf,
            &output,
            DefinitionStrategy::Flattened,
            DefinitionFormat::Tuples,
            &config,
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "(\"MUUMUUS\", \"a loose Hawaiian dress\"),\n(\"TOETOES\", \"tall grass\"),\n"
        );
    }
}

#[test]
fn test_harvest_with_pdf_extract_backend() {
    let dir = TempDir::new().unwrap();
    let pdf = write_pdf(&dir, "sevens.pdf", &dictionary_pages());
    let output = dir.path().join("words.txt");

    harvest(&pdf, &output, &pdf_extract_config()).unwrap();

    assert_eq!(fs::read_to_string(output).unwrap(), "MUUMUUS\nTOETOES\n");
}
