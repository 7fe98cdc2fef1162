use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::route_types::{Track, TrackPoint};

/// Point-bearing GPX element names, in preference order: track points over
/// route points over plain waypoints.
const POINT_TAGS: [&str; 3] = ["trkpt", "rtept", "wpt"];

/// Extract an ordered point sequence from GPX-like text.
///
/// Two stages: a structured quick-xml pass, and a raw text scan used only
/// when the structured pass yields nothing (including when the document is
/// not well-formed XML). Never fails; hopeless input gives an empty track.
pub fn extract(raw_text: &str) -> Track {
    let points = structured_scan(raw_text).unwrap_or_default();
    if !points.is_empty() {
        return Track { points };
    }
    Track {
        points: fallback_scan(raw_text),
    }
}

/// Structured pass. Streams the whole document collecting trkpt, rtept and
/// wpt elements into separate buckets, then keeps the first non-empty bucket
/// in [`POINT_TAGS`] order. Returns `None` on any XML error: partial results
/// are discarded, like a DOM parser rejecting the document wholesale.
fn structured_scan(xml: &str) -> Option<Vec<TrackPoint>> {
    let mut reader = Reader::from_str(xml);
    let mut trkpts: Vec<TrackPoint> = Vec::new();
    let mut rtepts: Vec<TrackPoint> = Vec::new();
    let mut wpts: Vec<TrackPoint> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let bucket = match e.local_name().as_ref() {
                    b"trkpt" => &mut trkpts,
                    b"rtept" => &mut rtepts,
                    b"wpt" => &mut wpts,
                    _ => continue,
                };
                if let Some(pt) = read_point(&e, &mut reader).ok()? {
                    bucket.push(pt);
                }
            }
            Ok(Event::Empty(e)) => {
                // Self-closing point: attributes only, no elevation child.
                let bucket = match e.local_name().as_ref() {
                    b"trkpt" => &mut trkpts,
                    b"rtept" => &mut rtepts,
                    b"wpt" => &mut wpts,
                    _ => continue,
                };
                if let Some((lat, lon)) = parse_lat_lon(&e).ok()? {
                    bucket.push(TrackPoint::new(lat, lon));
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => return None,
            _ => {}
        }
    }

    for bucket in [trkpts, rtepts, wpts] {
        if !bucket.is_empty() {
            return Some(bucket);
        }
    }
    Some(Vec::new())
}

/// Parse lat/lon attributes from a point element's start tag.
/// `Ok(None)` when either attribute is missing or not a finite number.
fn parse_lat_lon(e: &BytesStart<'_>) -> Result<Option<(f64, f64)>, quick_xml::Error> {
    let mut lat: Option<f64> = None;
    let mut lon: Option<f64> = None;

    for attr_result in e.attributes() {
        let attr = attr_result.map_err(quick_xml::Error::from)?;
        let val = std::str::from_utf8(&attr.value).unwrap_or_default();
        match attr.key.local_name().as_ref() {
            b"lat" => lat = val.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            b"lon" => lon = val.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => {}
        }
    }

    Ok(lat.zip(lon))
}

/// Consume a point element and its children, returning the point if its
/// coordinates are usable. Called after `Event::Start` for the element.
fn read_point<'a>(
    start: &BytesStart<'a>,
    reader: &mut Reader<&'a [u8]>,
) -> Result<Option<TrackPoint>, quick_xml::Error> {
    let Some((lat, lon)) = parse_lat_lon(start)? else {
        // Unusable coordinates: drop the point, still consume its children.
        reader.read_to_end(start.name())?;
        return Ok(None);
    };

    let mut ele: Option<f64> = None;
    let end_name = start.name().0.to_vec();

    // The first <ele> descendant at any depth supplies the elevation, so
    // other children (time, name, extensions) are streamed through rather
    // than skipped subtree-by-subtree. Non-finite values count as absent.
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"ele" {
                    let text = reader.read_text(e.name())?;
                    if ele.is_none() {
                        ele = text.trim().parse::<f64>().ok().filter(|v| v.is_finite());
                    }
                }
            }
            Ok(Event::End(e)) if e.name().0 == end_name.as_slice() => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(e),
            _ => {}
        }
    }

    Ok(Some(TrackPoint { lat, lon, ele }))
}

/// Fallback pass: scan the raw text for point-shaped fragments.
///
/// Matches `<tag lat="…" lon="…" …> … </tag>` where both tag names are any of
/// trkpt/rtept/wpt (they need not agree), attribute values are non-empty runs
/// of `[-0-9.]`, and the first `<ele>…</ele>` inside the body supplies the
/// elevation. Unlike the structured pass, all three tag kinds are collected
/// together in source order with no priority; that looseness is intentional.
fn fallback_scan(text: &str) -> Vec<TrackPoint> {
    let mut points = Vec::new();
    let mut pos = 0;

    while let Some(rel) = text[pos..].find('<') {
        let open = pos + rel;
        match match_point(text, open) {
            Some((pt, end)) => {
                if let Some(pt) = pt {
                    points.push(pt);
                }
                pos = end;
            }
            None => pos = open + 1,
        }
    }

    points
}

/// Try to match one point fragment starting at the `<` at `open`.
///
/// On a match, returns the point (or `None` for a matched fragment with
/// unparseable coordinates) and the byte offset just past the closing tag.
fn match_point(text: &str, open: usize) -> Option<(Option<TrackPoint>, usize)> {
    let rest = &text[open + 1..];
    let tag = POINT_TAGS.iter().copied().find(|t| {
        rest.starts_with(t) && rest[t.len()..].starts_with(|c: char| c.is_whitespace())
    })?;

    let cursor = skip_whitespace(text, open + 1 + tag.len())?;
    let (lat_raw, cursor) = expect_attr(text, cursor, "lat")?;
    let cursor = skip_whitespace(text, cursor)?;
    let (lon_raw, cursor) = expect_attr(text, cursor, "lon")?;

    // Remainder of the open tag.
    let tag_end = cursor + text[cursor..].find('>')?;
    let body_start = tag_end + 1;

    // Earliest closing tag of any point kind ends the fragment.
    let mut close: Option<(usize, usize)> = None;
    for t in POINT_TAGS {
        let needle = format!("</{t}>");
        if let Some(i) = text[body_start..].find(&needle) {
            let at = body_start + i;
            if close.is_none_or(|(prev, _)| at < prev) {
                close = Some((at, at + needle.len()));
            }
        }
    }
    let (close_start, close_end) = close?;

    let lat = lat_raw.parse::<f64>().ok().filter(|v| v.is_finite());
    let lon = lon_raw.parse::<f64>().ok().filter(|v| v.is_finite());
    let pt = lat.zip(lon).map(|(lat, lon)| TrackPoint {
        lat,
        lon,
        ele: find_ele(&text[body_start..close_start]),
    });

    Some((pt, close_end))
}

/// Advance past at least one whitespace character.
fn skip_whitespace(text: &str, pos: usize) -> Option<usize> {
    let rest = &text[pos..];
    let skipped = rest
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(rest.len());
    if skipped == 0 { None } else { Some(pos + skipped) }
}

/// Expect `name="value"` at `pos` with a numeric-looking value.
/// Returns the raw value and the offset past the closing quote.
fn expect_attr<'a>(text: &'a str, pos: usize, name: &str) -> Option<(&'a str, usize)> {
    let rest = &text[pos..];
    let prefix_len = name.len() + 2; // name="
    if !(rest.starts_with(name) && rest[name.len()..].starts_with("=\"")) {
        return None;
    }
    let value = &rest[prefix_len..];
    let end = value.find('"')?;
    let raw = &value[..end];
    if raw.is_empty() || !raw.bytes().all(is_number_char) {
        return None;
    }
    Some((raw, pos + prefix_len + end + 1))
}

/// First `<ele>…</ele>` in the body whose content is a numeric-looking run.
fn find_ele(body: &str) -> Option<f64> {
    let mut search = 0;
    while let Some(i) = body[search..].find("<ele>") {
        let value_start = search + i + "<ele>".len();
        let end = body[value_start..].find("</ele>")?;
        let raw = &body[value_start..value_start + end];
        if !raw.is_empty() && raw.bytes().all(is_number_char) {
            return raw.parse::<f64>().ok();
        }
        search = value_start;
    }
    None
}

fn is_number_char(b: u8) -> bool {
    b == b'-' || b == b'.' || b.is_ascii_digit()
}
