use anyhow::Result;
use secrecy::ExposeSecret;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use wordkey_core::FilterOptions;
use wordkey_password::{passphrase_bits, PassphraseGen};
use wordkey_wordlist::{WordFilter, WordList};

fn write_wordlist(words: &[&str]) -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    for word in words {
        writeln!(file, "{}", word)?;
    }
    file.flush()?;
    Ok(file)
}

#[test]
fn generate_from_file() -> Result<()> {
    let file = write_wordlist(&[
        "correct", "horse", "battery", "staple", "lamp", "ocean",
    ])?;
    let reader = BufReader::new(File::open(file.path())?);
    let list = WordList::read(reader, &WordFilter::default())?;
    assert_eq!(6, list.len());

    let generator = PassphraseGen::new(4);
    let result = generator.one(&list)?;
    let words: Vec<&str> =
        result.password.expose_secret().split('-').collect();
    assert_eq!(4, words.len());
    for word in words {
        assert!(list.words().contains(&word.to_owned()));
    }
    assert_eq!(passphrase_bits(6, 4), result.bits);
    Ok(())
}

#[test]
fn generate_streaming_from_file() -> Result<()> {
    let file = write_wordlist(&[
        "correct", "horse", "battery", "staple", "lamp", "ocean",
    ])?;
    let reader = BufReader::new(File::open(file.path())?);

    let generator = PassphraseGen::new(3).delimiter(" ");
    let result =
        generator.one_streaming(reader.lines(), &WordFilter::default())?;
    let words: Vec<&str> =
        result.password.expose_secret().split(' ').collect();
    assert_eq!(3, words.len());
    assert_eq!(passphrase_bits(6, 3), result.bits);
    Ok(())
}

#[test]
fn generate_applies_filter() -> Result<()> {
    let file = write_wordlist(&["cat", "dog", "bird", "horse's", "ant"])?;
    let reader = BufReader::new(File::open(file.path())?);

    let options = FilterOptions {
        max_word_length: 3,
        ..Default::default()
    };
    let list = WordList::read(reader, &WordFilter::new(&options))?;

    // bird exceeds the length bound and horse's is excluded.
    let mut words = list.words().to_vec();
    words.sort();
    assert_eq!(vec!["ant", "cat", "dog"], words);
    Ok(())
}

#[test]
fn generate_insufficient_candidates() -> Result<()> {
    let file = write_wordlist(&["cat", "dog"])?;
    let reader = BufReader::new(File::open(file.path())?);

    let generator = PassphraseGen::new(4);
    let result =
        generator.one_streaming(reader.lines(), &WordFilter::default());
    assert!(result.is_err());
    Ok(())
}

#[test]
fn generate_many() -> Result<()> {
    let list: WordList = ["cat", "dog", "ant"]
        .iter()
        .map(|word| (*word).to_owned())
        .collect::<Vec<_>>()
        .into();

    let generator = PassphraseGen::default();
    let results = generator.many(&list, 5)?;
    assert_eq!(5, results.len());
    for result in results {
        assert_eq!(
            4,
            result.password.expose_secret().split('-').count()
        );
    }
    Ok(())
}
