pub type dnnl_dim_t = i64;
pub mod dnnl_data_type_t {
    #[doc = " Undefined data type, used for empty memory descriptors."]
    pub const dnnl_data_type_undef: Type = 0;
    pub type Type = ::std::os::raw::c_uint;
}
pub mod dnnl_format_tag_t {
    #[doc = " Memory format tag specification.\n\n oneDNN formats describe physical data layout."]
    pub type Type = ::std::os::raw::c_uint;
    #[doc = " Undefined memory format tag"]
    pub const dnnl_format_tag_undef: Type = 0;
    #[doc = "< plain 1D tensor"]
    pub const dnnl_a: Type = 2;
    #[doc = "< plain 2D tensor"]
    pub const dnnl_ab: Type = 3;
    #[doc = "< plain 12D tensor"]
    pub const dnnl_abcdefghijkl: Type = 13;
    #[doc = "< permuted 5D tensor"]
    pub const dnnl_abced: Type = 41;
    #[doc = " 3D RNN data tensor in the format (seq_length, batch, input channels),\n an alias to #dnnl_abc."]
    pub const dnnl_tnc: Type = 70;
    #[doc = " Just a sentinel, not real memory format tag. Must be changed after new\n format tag is added."]
    pub const dnnl_format_tag_last: Type = 71;
}
pub mod dnnl_prop_kind_t {
    #[doc = " Forward data propagation (training mode)."]
    pub const dnnl_forward_training: Type = 64;
}
