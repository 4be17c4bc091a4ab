use clustermgmt_model_core::resource;

resource! {
    /// Router through which cluster applications are reached.
    pub class Ingress("Ingress") {
        /// DNS name assigned to the router.
        dns_name: string = "dns_name",
        /// Whether this is the cluster's default router.
        default: boolean = "default",
        /// Route label selectors, each in `key=value` form.
        route_selectors: strings = "route_selectors",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field_does_not_hide_default_value() {
        let empty = <Ingress as Default>::default();
        assert!(empty.is_empty());
        assert_eq!(empty, Ingress::builder().build().unwrap());
        assert_eq!(empty.get_default(), None);

        let ingress = IngressBuilder::new().default(true).build().unwrap();
        assert!(ingress.default());
        assert_eq!(
            marshal_ingress_to_string(&ingress),
            r#"{"kind":"Ingress","default":true}"#
        );
    }
}
