//! Builders for synthetic JPEG files used across the unit tests.

use crate::jpeg::{APP1, SOI, XMP_EXTENSION_HEADER, XMP_PRIMARY_HEADER};

const EOI: [u8; 2] = [0xFF, 0xD9];

/// GUID used for every extension segment built here (32 ASCII hex digits).
pub const EXTENSION_GUID: &[u8; 32] = b"0123456789ABCDEF0123456789ABCDEF";

fn app1_segment(body: &[u8]) -> Vec<u8> {
    let length = (body.len() + 2) as u16;
    let mut segment = Vec::with_capacity(body.len() + 4);
    segment.extend_from_slice(&APP1);
    segment.extend_from_slice(&length.to_be_bytes());
    segment.extend_from_slice(body);
    segment
}

/// A standard XMP APP1 segment carrying `xml`.
pub fn primary_segment(xml: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(XMP_PRIMARY_HEADER);
    body.push(0);
    body.extend_from_slice(xml.as_bytes());
    app1_segment(&body)
}

/// An extended XMP APP1 segment carrying `fragment` at byte `offset`.
pub fn extension_segment(fragment: &str, offset: u32) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(XMP_EXTENSION_HEADER);
    body.push(0);
    body.extend_from_slice(EXTENSION_GUID);
    body.extend_from_slice(&(offset + fragment.len() as u32).to_be_bytes());
    body.extend_from_slice(&offset.to_be_bytes());
    body.extend_from_slice(fragment.as_bytes());
    app1_segment(&body)
}

/// Split `xml` into extension segments of at most `chunk` bytes each.
pub fn extension_segments(xml: &str, chunk: usize) -> Vec<Vec<u8>> {
    let mut segments = Vec::new();
    let mut offset = 0;
    while offset < xml.len() {
        let end = (offset + chunk).min(xml.len());
        segments.push(extension_segment(&xml[offset..end], offset as u32));
        offset = end;
    }
    segments
}

/// An APP1 segment that is not XMP (EXIF-like).
pub fn unrelated_segment(body: &[u8]) -> Vec<u8> {
    app1_segment(body)
}

/// Wrap segments in SOI ... EOI.
pub fn jpeg_from_segments(segments: &[Vec<u8>]) -> Vec<u8> {
    let mut jpeg = SOI.to_vec();
    // APP0 JFIF, as real files carry one first
    jpeg.extend_from_slice(&[
        0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00, 0x01,
        0x00, 0x01, 0x00, 0x00,
    ]);
    for segment in segments {
        jpeg.extend_from_slice(segment);
    }
    jpeg.extend_from_slice(&EOI);
    jpeg
}

/// Standard XMP packet of an XDM file.
pub const XDM_PRIMARY_XML: &str = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
        xmlns:xmpNote="http://ns.adobe.com/xmp/note/"
        xmlns:Device="http://ns.xdm.org/photos/1.0/device/"
        xmpNote:HasExtendedXMP="0123456789ABCDEF0123456789ABCDEF">
      <Device:Revision>1.0</Device:Revision>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;

/// Extended XMP packet of an XDM file. The device vendor and device pose use
/// the attribute form; everything else uses child elements.
pub const XDM_EXTENSION_XML: &str = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""/>
    <rdf:Description rdf:about=""
        xmlns:Device="http://ns.xdm.org/photos/1.0/device/"
        xmlns:Camera="http://ns.xdm.org/photos/1.0/camera/"
        xmlns:VendorInfo="http://ns.xdm.org/photos/1.0/vendorinfo/"
        xmlns:DevicePose="http://ns.xdm.org/photos/1.0/devicepose/"
        xmlns:CameraPose="http://ns.xdm.org/photos/1.0/camerapose/"
        xmlns:Image="http://ns.xdm.org/photos/1.0/image/"
        xmlns:DepthMap="http://ns.xdm.org/photos/1.0/depthmap/"
        xmlns:NoiseModel="http://ns.xdm.org/photos/1.0/noisemodel/"
        xmlns:PerspectiveModel="http://ns.xdm.org/photos/1.0/perspectivemodel/"
        xmlns:Other="http://ns.example.com/other/">
      <Device:VendorInfo VendorInfo:Manufacturer="Intel" VendorInfo:Model="RealSense R200"/>
      <Device:Pose DevicePose:Latitude="45.5" DevicePose:Longitude="-122.25" DevicePose:Altitude="30"/>
      <Device:Cameras>
        <rdf:Seq>
          <rdf:li rdf:parseType="Resource">
            <Camera:VendorInfo>
              <VendorInfo:Manufacturer>Intel</VendorInfo:Manufacturer>
              <VendorInfo:Model>R200 Color</VendorInfo:Model>
            </Camera:VendorInfo>
            <Camera:Pose>
              <CameraPose:PositionX>0.058</CameraPose:PositionX>
              <CameraPose:PositionY>0</CameraPose:PositionY>
              <CameraPose:PositionZ>-0.001</CameraPose:PositionZ>
              <CameraPose:RotationAxisX>0</CameraPose:RotationAxisX>
              <CameraPose:RotationAxisY>1</CameraPose:RotationAxisY>
              <CameraPose:RotationAxisZ>0</CameraPose:RotationAxisZ>
              <CameraPose:RotationAngle>0.25</CameraPose:RotationAngle>
            </Camera:Pose>
            <Camera:ImagingModel>
              <rdf:Description>
                <PerspectiveModel:FocalLengthX>0.92</PerspectiveModel:FocalLengthX>
                <PerspectiveModel:FocalLengthY>1.23</PerspectiveModel:FocalLengthY>
                <PerspectiveModel:PrincipalPointX>0.5</PerspectiveModel:PrincipalPointX>
                <PerspectiveModel:PrincipalPointY>0.49</PerspectiveModel:PrincipalPointY>
              </rdf:Description>
            </Camera:ImagingModel>
            <Camera:Image>
              <Image:Mime>image/jpeg</Image:Mime>
              <Image:Data>SU1BR0U=</Image:Data>
            </Camera:Image>
            <Camera:DepthMap>
              <rdf:Description>
                <DepthMap:Metric>true</DepthMap:Metric>
                <DepthMap:Format>RangeLinear</DepthMap:Format>
                <DepthMap:Near>0.5</DepthMap:Near>
                <DepthMap:Far>4.5</DepthMap:Far>
                <DepthMap:Mime>image/png</DepthMap:Mime>
                <DepthMap:Data>REVQVEg=</DepthMap:Data>
                <NoiseModel:Reliability>
                  <Image:Mime>image/png</Image:Mime>
                  <Image:Data>Q09ORg==</Image:Data>
                </NoiseModel:Reliability>
              </rdf:Description>
            </Camera:DepthMap>
          </rdf:li>
          <rdf:li rdf:parseType="Resource">
            <Camera:DepthMap DepthMap:Mime="image/png" DepthMap:Data="UkFX"/>
          </rdf:li>
        </rdf:Seq>
      </Device:Cameras>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>"#;

/// Standard XMP packet of a Lens Blur file.
pub const LENS_BLUR_PRIMARY_XML: &str = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
        xmlns:GFocus="http://ns.google.com/photos/1.0/focus/"
        xmlns:GImage="http://ns.google.com/photos/1.0/image/"
        xmlns:GDepth="http://ns.google.com/photos/1.0/depthmap/"
        xmlns:xmpNote="http://ns.adobe.com/xmp/note/"
        GFocus:BlurAtInfinity="0.0125"
        GFocus:FocalDistance="14.25"
        GFocus:FocalPointX="0.5"
        GFocus:FocalPointY="0.375"
        GImage:Mime="image/jpeg"
        GDepth:Format="RangeInverse"
        GDepth:Near="11.5"
        GDepth:Far="48.75"
        GDepth:Mime="image/png"
        xmpNote:HasExtendedXMP="0123456789ABCDEF0123456789ABCDEF"/>
  </rdf:RDF>
</x:xmpmeta>"#;

/// Extended XMP packet of a Lens Blur file.
pub const LENS_BLUR_EXTENSION_XML: &str = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
        xmlns:GImage="http://ns.google.com/photos/1.0/image/"
        xmlns:GDepth="http://ns.google.com/photos/1.0/depthmap/"
        GImage:Data="SU1BR0U="
        GDepth:Data="REVQVEg="/>
  </rdf:RDF>
</x:xmpmeta>"#;

/// A complete XDM sample file, extension packet split into small chunks.
pub fn xdm_sample() -> Vec<u8> {
    let mut segments = vec![primary_segment(XDM_PRIMARY_XML)];
    segments.push(unrelated_segment(b"Exif\0\0II*\0\x08\0\0\0"));
    segments.extend(extension_segments(XDM_EXTENSION_XML, 700));
    jpeg_from_segments(&segments)
}

/// A complete Lens Blur sample file.
pub fn lens_blur_sample() -> Vec<u8> {
    let mut segments = vec![primary_segment(LENS_BLUR_PRIMARY_XML)];
    segments.extend(extension_segments(LENS_BLUR_EXTENSION_XML, 256));
    jpeg_from_segments(&segments)
}
