// use `cargo run -p gdata-parsable --example build_entry` to run from git repository base directory

use gdata_parsable::{
	atom::{
		Author,
		Category,
		Entry,
	},
	serializer::serialize_document,
	Parsable,
	Timestamp,
};

fn main() {
	let entry = Entry {
		etag: Some("W/\"CUMBRX47eCp7ImA9WxRVEkQ.\"".into()),
		title: Some("Tennis with Beth".into()),
		updated: Some(Timestamp::parse("2009-02-18T15:29:43.000Z").unwrap()),
		categories: vec![Category::new("event", Some("http://schemas.google.com/g/2005#kind"))],
		authors: vec![Author::new("Jo March")],
		..Entry::default()
	};

	eprintln!("Generating XML output...");

	let xml = serialize_document(&entry).unwrap();
	println!("{}", xml);

	eprintln!("Parsing it again...");

	let parsed = Entry::from_xml(xml.as_bytes()).unwrap();
	assert_eq!(parsed, entry);
	println!("{:#?}", parsed);
}
