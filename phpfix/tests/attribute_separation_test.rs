//! Test suite for the DTO construct attribute separation rule.

use phpfix::fixer::{FileInfo, Fixer, WhitespacesConfig};
use phpfix::rules::DtoConstructAttributeSeparationFixer;
use phpfix::test_utils::FixerTester;
use phpfix::tokens::TokenStream;

fn fixer() -> DtoConstructAttributeSeparationFixer {
    DtoConstructAttributeSeparationFixer::with_whitespaces_config(WhitespacesConfig::default())
}

#[test]
fn two_annotated_siblings_get_one_blank_line() {
    let expected = r"<?php
class FooDto {
    public function __construct(
        #[\SensitiveParameter]
        public ?int $id,

#[\SensitiveParameter]
        public ?string $name,
    ) {}
}";
    let input = r"<?php
class FooDto {
    public function __construct(
        #[\SensitiveParameter]
        public ?int $id,
        #[\SensitiveParameter]
        public ?string $name,
    ) {}
}";
    FixerTester::new().assert_fix(&fixer(), expected, Some(input));
}

#[test]
fn unannotated_trailing_parameter_is_left_alone() {
    let expected = r"<?php
class FooDto {
    public function __construct(
        #[\SensitiveParameter]
        public ?int $id,

#[\SensitiveParameter]
        public ?string $name,
        public ?int $age,
    ) {}
}";
    let input = r"<?php
class FooDto {
    public function __construct(
        #[\SensitiveParameter]
        public ?int $id,
        #[\SensitiveParameter]
        public ?string $name,
        public ?int $age,
    ) {}
}";
    FixerTester::new().assert_fix(&fixer(), expected, Some(input));
}

#[test]
fn unannotated_parameters_need_no_separation() {
    let expected = r"<?php
class FooDto {
    public function __construct(
        public ?int $id,
        public ?string $name,
    ) {}
}";
    FixerTester::new().assert_fix(&fixer(), expected, None);
}

#[test]
fn single_parameter_never_triggers() {
    let expected = r"<?php
class FooDto {
    public function __construct(
        #[\SensitiveParameter]
        public ?int $id,
    ) {}
}";
    FixerTester::new().assert_fix(&fixer(), expected, None);
}

#[test]
fn annotation_on_earlier_parameter_only_is_irrelevant() {
    let expected = r"<?php
class FooDto {
    public function __construct(
        #[\SensitiveParameter]
        public ?int $id,
        public ?string $name,
    ) {}
}";
    FixerTester::new().assert_fix(&fixer(), expected, None);
}

#[test]
fn crlf_line_ending_is_honored() {
    let config = WhitespacesConfig::new("    ", "\r\n").unwrap();
    let fixer = DtoConstructAttributeSeparationFixer::with_whitespaces_config(config);
    let input = "<?php\r\nclass FooDto {\r\n    public function __construct(\r\n        #[\\A]\r\n        public ?int $id,\r\n        #[\\A]\r\n        public ?int $b,\r\n    ) {}\r\n}";
    let expected = "<?php\r\nclass FooDto {\r\n    public function __construct(\r\n        #[\\A]\r\n        public ?int $id,\r\n\r\n#[\\A]\r\n        public ?int $b,\r\n    ) {}\r\n}";
    FixerTester::new().assert_fix(&fixer, expected, Some(input));
}

#[test]
fn token_count_is_invariant_under_the_fix() {
    let input = r"<?php
class FooDto {
    public function __construct(
        #[\A]
        public ?int $id,
        #[\A]
        public ?int $b,
    ) {}
}";
    let mut tokens = TokenStream::from_code(input).unwrap();
    let count = tokens.len();
    fixer()
        .fix(&FileInfo::new("FooDto.php"), &mut tokens)
        .unwrap();
    assert!(tokens.is_changed());
    assert_eq!(tokens.len(), count);
}

#[test]
fn non_candidate_stream_is_untouched() {
    let source = r"<?php
function foo(#[\A] int $a, #[\A] int $b): void {}";
    let mut tokens = TokenStream::from_code(source).unwrap();
    let fixer = fixer();
    assert!(!fixer.is_candidate(&tokens));
    fixer
        .fix(&FileInfo::new("FooDto.php"), &mut tokens)
        .unwrap();
    assert!(!tokens.is_changed());
    assert_eq!(tokens.generate_code(), source);
}

#[test]
fn comma_followed_by_non_whitespace_degrades_to_no_op() {
    let source = r"<?php
class FooDto {
    public function __construct(
        public ?int $id,#[\A]
        public ?int $b,
    ) {}
}";
    let mut tokens = TokenStream::from_code(source).unwrap();
    fixer()
        .fix(&FileInfo::new("FooDto.php"), &mut tokens)
        .unwrap();
    assert!(!tokens.is_changed());
    assert_eq!(tokens.generate_code(), source);
}

#[test]
fn missing_constructor_comma_degrades_to_no_op() {
    // Malformed on purpose: the pair needs separation but no comma ever
    // follows the first marker.
    let source = "<?php function __construct(public ?int $id #[\\A] public ?int $b";
    let mut tokens = TokenStream::from_code(source).unwrap();
    fixer()
        .fix(&FileInfo::new("FooDto.php"), &mut tokens)
        .unwrap();
    assert_eq!(tokens.generate_code(), source);
}
