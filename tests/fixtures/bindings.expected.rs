impl_format_tag!(format_tag_undef, dnnl_format_tag_undef, 6, "Undefined memory format tag");
impl_format_tag!(a, dnnl_a, 1, "< plain 1D tensor");
impl_format_tag!(ab, dnnl_ab, 2, "< plain 2D tensor");
impl_format_tag!(abcdefghijkl, dnnl_abcdefghijkl, 12, "< plain 12D tensor");
impl_format_tag!(abced, dnnl_abced, 5, "< permuted 5D tensor");
impl_format_tag!(tnc, dnnl_tnc, 3, "3D RNN data tensor in the format (seq_length, batch, input channels),\\n an alias to #dnnl_abc.");
impl_format_tag!(format_tag_last, dnnl_format_tag_last, 6, "Just a sentinel, not real memory format tag. Must be changed after new\\n format tag is added.");
