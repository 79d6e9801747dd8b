use gdata_parsable::{
	atom::{
		Category,
		Entry,
		EntryHooks,
	},
	namespaces::ATOM_NAMESPACE,
	parser::value_from_property,
	serializer::ContentWriter,
	tree::Element,
	Error,
	ExtraContent,
	Hooks,
	Namespaces,
	ParseResult,
	Parsable,
	Result,
	TypeDescriptor,
};

const YT_NAMESPACE: &str = "http://gdata.youtube.com/schemas/2007";
const KEYWORDS_SCHEME: &str = "http://gdata.youtube.com/schemas/2007/keywords.cat";

/// Entry extended by a few YouTube elements
#[derive(Default, Debug)]
struct Video {
	entry: Entry,
	duration: Option<u32>,
	keywords: Vec<String>,
	no_embed: bool,
}

impl AsRef<Entry> for Video {
	fn as_ref(&self) -> &Entry {
		&self.entry
	}
}

impl AsMut<Entry> for Video {
	fn as_mut(&mut self) -> &mut Entry {
		&mut self.entry
	}
}

struct VideoHooks;

impl Hooks<Video> for VideoHooks {
	fn parse_child(&self, video: &mut Video, child: &Element) -> Result<ParseResult> {
		if child.is_namespace(ATOM_NAMESPACE)
			&& child.local_name() == "category"
			&& child.attribute("scheme") == Some(KEYWORDS_SCHEME)
		{
			video.keywords.extend(child.attribute("term").map(str::to_owned));
			return Ok(ParseResult::Accepted);
		}
		if !child.is_namespace(YT_NAMESPACE) {
			return Ok(ParseResult::NotRecognized);
		}
		match child.local_name() {
			"duration" => video.duration = value_from_property(child, "seconds")?,
			"noembed" => video.no_embed = true,
			_ => return Ok(ParseResult::NotRecognized),
		}
		Ok(ParseResult::Accepted)
	}

	fn emit(&self, video: &Video, content: &mut ContentWriter<'_>) -> Result<()> {
		for keyword in &video.keywords {
			content.element(&Category::new(keyword, Some(KEYWORDS_SCHEME)))?;
		}
		if let Some(duration) = video.duration {
			content.child("yt:duration", |attributes| attributes.display_attribute("seconds", &duration), |_| Ok(()))?;
		}
		if video.no_embed {
			content.child("yt:noembed", |_| (), |_| Ok(()))?;
		}
		Ok(())
	}

	fn namespaces(&self, _video: &Video, namespaces: &mut Namespaces) {
		namespaces.insert("yt", YT_NAMESPACE);
	}
}

impl Parsable for Video {
	fn descriptor() -> &'static TypeDescriptor<Self> {
		static DESCRIPTOR: TypeDescriptor<Video> = TypeDescriptor {
			element_name: "entry",
			element_namespace: None,
			hooks: &[&VideoHooks, &EntryHooks],
		};
		&DESCRIPTOR
	}

	fn extra(&self) -> &ExtraContent {
		&self.entry.extra
	}

	fn extra_mut(&mut self) -> &mut ExtraContent {
		&mut self.entry.extra
	}
}

const VIDEO: &str = "<entry xmlns='http://www.w3.org/2005/Atom' xmlns:gd='http://schemas.google.com/g/2005' xmlns:yt='http://gdata.youtube.com/schemas/2007' gd:etag='E'>\
	<title type='text'>Cats</title>\
	<id>tag:youtube.com,2008:video:abc</id>\
	<category term='Pets' scheme='http://gdata.youtube.com/schemas/2007/categories.cat'/>\
	<category term='cat' scheme='http://gdata.youtube.com/schemas/2007/keywords.cat'/>\
	<category term='funny' scheme='http://gdata.youtube.com/schemas/2007/keywords.cat'/>\
	<yt:duration seconds='215'/>\
	<yt:noembed/>\
	</entry>";

#[test]
fn both_levels_parse() {
	let video = Video::from_xml(VIDEO.as_bytes()).unwrap();
	assert_eq!(video.entry.etag.as_deref(), Some("E"));
	assert_eq!(video.entry.title.as_deref(), Some("Cats"));
	assert_eq!(video.entry.id.as_deref(), Some("tag:youtube.com,2008:video:abc"));
	// the subtype sees keyword categories before the entry level does
	assert_eq!(video.entry.categories.len(), 1);
	assert_eq!(video.entry.categories[0].term, "Pets");
	assert_eq!(video.keywords, vec!["cat", "funny"]);
	assert_eq!(video.duration, Some(215));
	assert!(video.no_embed);
	assert!(video.entry.extra.is_empty());
}

#[test]
fn base_content_first() {
	let video = Video::from_xml(VIDEO.as_bytes()).unwrap();
	assert_eq!(video.to_xml().unwrap(), VIDEO);
}

#[test]
fn subtype_errors_name_the_element() {
	let err = Video::from_xml(b"<entry xmlns:yt='http://gdata.youtube.com/schemas/2007'><yt:duration seconds='long'/></entry>")
		.unwrap_err();
	assert_eq!(
		err,
		Error::UnknownPropertyValue {
			path: "<entry/yt:duration>".into(),
			property: "seconds".into(),
			value: "long".into(),
		},
	);
}

#[test]
fn unknown_yt_elements_are_kept() {
	let video = Video::from_xml(
		b"<entry xmlns:yt='http://gdata.youtube.com/schemas/2007'><yt:statistics viewCount='3'/><id>x</id></entry>",
	)
	.unwrap();
	assert_eq!(video.entry.id.as_deref(), Some("x"));
	assert_eq!(video.entry.extra.xml(), ["<yt:statistics viewCount='3'/>".to_owned()]);
	assert_eq!(
		video.to_xml().unwrap(),
		"<entry xmlns='http://www.w3.org/2005/Atom' xmlns:yt='http://gdata.youtube.com/schemas/2007'><id>x</id><yt:statistics viewCount='3'/></entry>",
	);
}
