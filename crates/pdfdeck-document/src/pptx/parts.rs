// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// XML parts of a picture-only PresentationML package.
//
// Part layout:
//   [Content_Types].xml, _rels/.rels, docProps/{core,app}.xml
//   ppt/presentation.xml (+ rels): rId1 master, rId2 theme, rId3.. slides
//   ppt/slideMasters/slideMaster1.xml, ppt/slideLayouts/slideLayout1.xml (blank)
//   ppt/theme/theme1.xml
//   ppt/slides/slideN.xml (+ rels): rId1 layout, rId2 picture
//   ppt/media/imageN.<ext>

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use pdfdeck_core::{Emu, ImageKind, SlideSize};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const NS_PRESENTATION: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_RELATIONSHIPS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PACKAGE_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// First `p:sldId` value; PowerPoint requires ids of 256 and above.
pub const FIRST_SLIDE_ID: usize = 256;

/// Relationship id of the first slide in `presentation.xml.rels`.
const FIRST_SLIDE_REL: usize = 3;

/// Notes page size PowerPoint writes by default (7.5" × 10").
const NOTES_SIZE: SlideSize = SlideSize {
    width: Emu(6_858_000),
    height: Emu(9_144_000),
};

// -- Package-level parts ------------------------------------------------------

/// `[Content_Types].xml` for `slide_count` slides embedding `media_kinds`.
pub fn content_types_xml(slide_count: usize, media_kinds: &BTreeSet<ImageKind>) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECLARATION);
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    for kind in media_kinds {
        xml.push_str(&format!(
            r#"<Default Extension="{}" ContentType="{}"/>"#,
            kind.extension(),
            kind.mime_type()
        ));
    }

    let overrides = [
        ("/ppt/presentation.xml", "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"),
        ("/ppt/slideMasters/slideMaster1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"),
        ("/ppt/slideLayouts/slideLayout1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"),
        ("/ppt/theme/theme1.xml", "application/vnd.openxmlformats-officedocument.theme+xml"),
        ("/docProps/core.xml", "application/vnd.openxmlformats-package.core-properties+xml"),
        ("/docProps/app.xml", "application/vnd.openxmlformats-officedocument.extended-properties+xml"),
    ];
    for (part, content_type) in overrides {
        xml.push_str(&format!(
            r#"<Override PartName="{part}" ContentType="{content_type}"/>"#
        ));
    }
    for number in 1..=slide_count {
        xml.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{number}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        ));
    }

    xml.push_str("</Types>");
    xml
}

/// `_rels/.rels`.
pub fn root_rels_xml() -> String {
    relationships_xml(&[
        ("rId1", REL_OFFICE_DOCUMENT, "ppt/presentation.xml".to_string()),
        ("rId2", REL_CORE_PROPERTIES, "docProps/core.xml".to_string()),
        ("rId3", REL_EXTENDED_PROPERTIES, "docProps/app.xml".to_string()),
    ])
}

/// `docProps/core.xml`.
pub fn core_props_xml(title: &str, created: DateTime<Utc>) -> String {
    let timestamp = created.format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        concat!(
            "{decl}",
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{title}</dc:title>",
            "<dc:creator>pdfdeck</dc:creator>",
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{ts}</dcterms:created>"#,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{ts}</dcterms:modified>"#,
            "</cp:coreProperties>"
        ),
        decl = XML_DECLARATION,
        title = escape_xml(title),
        ts = timestamp,
    )
}

/// `docProps/app.xml`.
pub fn app_props_xml(slide_count: usize) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>pdfdeck</Application>",
            "<Slides>{count}</Slides>",
            "</Properties>"
        ),
        decl = XML_DECLARATION,
        count = slide_count,
    )
}

// -- Presentation -------------------------------------------------------------

/// `ppt/presentation.xml` with a fixed canvas.
pub fn presentation_xml(size: SlideSize, slide_count: usize) -> String {
    let mut xml = String::with_capacity(1024 + slide_count * 48);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<p:presentation xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" saveSubsetFonts="1">"#
    ));

    xml.push_str("<p:sldMasterIdLst>");
    xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
    xml.push_str("</p:sldMasterIdLst>");

    if slide_count > 0 {
        xml.push_str("<p:sldIdLst>");
        for index in 0..slide_count {
            xml.push_str(&format!(
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                FIRST_SLIDE_ID + index,
                FIRST_SLIDE_REL + index
            ));
        }
        xml.push_str("</p:sldIdLst>");
    }

    xml.push_str(&format!(
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        size.width, size.height
    ));
    xml.push_str(&format!(
        r#"<p:notesSz cx="{}" cy="{}"/>"#,
        NOTES_SIZE.width, NOTES_SIZE.height
    ));
    xml.push_str("</p:presentation>");
    xml
}

/// `ppt/_rels/presentation.xml.rels`.
pub fn presentation_rels_xml(slide_count: usize) -> String {
    let slide_ids: Vec<String> = (0..slide_count)
        .map(|index| format!("rId{}", FIRST_SLIDE_REL + index))
        .collect();

    let mut rels = vec![
        ("rId1", REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml".to_string()),
        ("rId2", REL_THEME, "theme/theme1.xml".to_string()),
    ];
    for (index, id) in slide_ids.iter().enumerate() {
        rels.push((id.as_str(), REL_SLIDE, format!("slides/slide{}.xml", index + 1)));
    }
    relationships_xml(&rels)
}

// -- Master, layout, theme ----------------------------------------------------

/// `ppt/slideMasters/slideMaster1.xml`.
pub fn slide_master_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<p:sldMaster xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}">"#,
            r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
            "<p:spTree>{tree}</p:spTree></p:cSld>",
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
            r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
            r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
            "</p:sldMaster>"
        ),
        decl = XML_DECLARATION,
        a = NS_DRAWING,
        r = NS_RELATIONSHIPS,
        p = NS_PRESENTATION,
        tree = group_shape_header(),
    )
}

/// `ppt/slideMasters/_rels/slideMaster1.xml.rels`.
pub fn slide_master_rels_xml() -> String {
    relationships_xml(&[
        ("rId1", REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml".to_string()),
        ("rId2", REL_THEME, "../theme/theme1.xml".to_string()),
    ])
}

/// `ppt/slideLayouts/slideLayout1.xml`, a blank layout with no placeholders.
pub fn slide_layout_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<p:sldLayout xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}" type="blank" preserve="1">"#,
            r#"<p:cSld name="Blank"><p:spTree>{tree}</p:spTree></p:cSld>"#,
            "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>",
            "</p:sldLayout>"
        ),
        decl = XML_DECLARATION,
        a = NS_DRAWING,
        r = NS_RELATIONSHIPS,
        p = NS_PRESENTATION,
        tree = group_shape_header(),
    )
}

/// `ppt/slideLayouts/_rels/slideLayout1.xml.rels`.
pub fn slide_layout_rels_xml() -> String {
    relationships_xml(&[(
        "rId1",
        REL_SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml".to_string(),
    )])
}

/// `ppt/theme/theme1.xml`: the smallest theme PowerPoint accepts.
pub fn theme_xml() -> String {
    let scheme_fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    let line = format!(r#"<a:ln w="9525">{scheme_fill}</a:ln>"#);
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";
    let font = r#"<a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/>"#;

    let colours = [
        ("dk1", r#"<a:sysClr val="windowText" lastClr="000000"/>"#.to_string()),
        ("lt1", r#"<a:sysClr val="window" lastClr="FFFFFF"/>"#.to_string()),
        ("dk2", srgb("1F497D")),
        ("lt2", srgb("EEECE1")),
        ("accent1", srgb("4F81BD")),
        ("accent2", srgb("C0504D")),
        ("accent3", srgb("9BBB59")),
        ("accent4", srgb("8064A2")),
        ("accent5", srgb("4BACC6")),
        ("accent6", srgb("F79646")),
        ("hlink", srgb("0000FF")),
        ("folHlink", srgb("800080")),
    ];

    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<a:theme xmlns:a="{NS_DRAWING}" name="Office Theme"><a:themeElements>"#
    ));

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    for (name, colour) in &colours {
        xml.push_str(&format!("<a:{name}>{colour}</a:{name}>"));
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(&format!(
        r#"<a:fontScheme name="Office"><a:majorFont>{font}</a:majorFont><a:minorFont>{font}</a:minorFont></a:fontScheme>"#
    ));

    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    xml.push_str(&format!("<a:fillStyleLst>{}</a:fillStyleLst>", scheme_fill.repeat(3)));
    xml.push_str(&format!("<a:lnStyleLst>{}</a:lnStyleLst>", line.repeat(3)));
    xml.push_str(&format!("<a:effectStyleLst>{}</a:effectStyleLst>", effect.repeat(3)));
    xml.push_str(&format!("<a:bgFillStyleLst>{}</a:bgFillStyleLst>", scheme_fill.repeat(3)));
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    xml
}

// -- Slides -------------------------------------------------------------------

/// `ppt/slides/slideN.xml`: one picture at the origin covering `size`.
pub fn picture_slide_xml(size: SlideSize, description: &str) -> String {
    let mut xml = String::with_capacity(1536);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<p:sld xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">"#
    ));
    xml.push_str("<p:cSld><p:spTree>");
    xml.push_str(&group_shape_header());

    xml.push_str("<p:pic>");
    xml.push_str("<p:nvPicPr>");
    xml.push_str(&format!(
        r#"<p:cNvPr id="2" name="Picture 1" descr="{}"/>"#,
        escape_xml(description)
    ));
    xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvPicPr>");

    xml.push_str("<p:blipFill>");
    xml.push_str(r#"<a:blip r:embed="rId2"/>"#);
    xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
    xml.push_str("</p:blipFill>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(&format!(
        r#"<a:ext cx="{}" cy="{}"/>"#,
        size.width, size.height
    ));
    xml.push_str("</a:xfrm>");
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</p:spPr>");
    xml.push_str("</p:pic>");

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");
    xml
}

/// `ppt/slides/_rels/slideN.xml.rels` pointing at the layout and the picture.
pub fn picture_slide_rels_xml(media_file_name: &str) -> String {
    relationships_xml(&[
        ("rId1", REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml".to_string()),
        ("rId2", REL_IMAGE, format!("../media/{media_file_name}")),
    ])
}

// -- Helpers ------------------------------------------------------------------

/// The non-visual root group every `p:spTree` starts with.
fn group_shape_header() -> String {
    concat!(
        "<p:nvGrpSpPr>",
        r#"<p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/>"#,
        "</p:nvGrpSpPr>",
        "<p:grpSpPr><a:xfrm>",
        r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
        r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#,
        "</a:xfrm></p:grpSpPr>"
    )
    .to_string()
}

fn srgb(hex: &str) -> String {
    format!(r#"<a:srgbClr val="{hex}"/>"#)
}

fn relationships_xml(rels: &[(&str, &str, String)]) -> String {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(r#"<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">"#));
    for (id, kind, target) in rels {
        xml.push_str(&format!(
            r#"<Relationship Id="{id}" Type="{kind}" Target="{}"/>"#,
            escape_xml(target)
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_special_characters() {
        assert_eq!(
            escape_xml(r#"a<b> & "c" 'd'"#),
            "a&lt;b&gt; &amp; &quot;c&quot; &apos;d&apos;"
        );
    }

    #[test]
    fn presentation_lists_slides_and_canvas() {
        let size = SlideSize::from_pixels(1000, 500);
        let xml = presentation_xml(size, 2);
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId4"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9525000" cy="4762500"/>"#));

        let rels = presentation_rels_xml(2);
        assert!(rels.contains(r#"Id="rId4""#));
        assert!(rels.contains(r#"Target="slides/slide2.xml""#));
    }

    #[test]
    fn empty_presentation_omits_slide_list() {
        let xml = presentation_xml(SlideSize::from_pixels(10, 10), 0);
        assert!(!xml.contains("sldIdLst"));
    }

    #[test]
    fn content_types_cover_media_and_slides() {
        let kinds: BTreeSet<ImageKind> = [ImageKind::Png, ImageKind::Jpeg].into_iter().collect();
        let xml = content_types_xml(2, &kinds);
        assert!(xml.contains(r#"Extension="png" ContentType="image/png""#));
        assert!(xml.contains(r#"Extension="jpeg" ContentType="image/jpeg""#));
        assert!(xml.contains(r#"PartName="/ppt/slides/slide2.xml""#));
        assert!(!xml.contains("slide3.xml"));
    }

    #[test]
    fn picture_fills_the_slide() {
        let size = SlideSize::from_pixels(40, 30);
        let xml = picture_slide_xml(size, "page & co.png");
        assert!(xml.contains(r#"<a:off x="0" y="0"/><a:ext cx="381000" cy="285750"/>"#));
        assert!(xml.contains(r#"descr="page &amp; co.png""#));
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
    }

    #[test]
    fn core_props_carry_timestamp() {
        let created = DateTime::parse_from_rfc3339("2026-03-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let xml = core_props_xml("Deck <1>", created);
        assert!(xml.contains("<dc:title>Deck &lt;1&gt;</dc:title>"));
        assert!(xml.contains(">2026-03-01T12:30:00Z</dcterms:created>"));
    }
}
