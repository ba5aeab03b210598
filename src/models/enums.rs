//! Code lists used across the API
//!
//! Codes are wire contracts and must never be renumbered. Members are written
//! by name; numeric codes are accepted on input.

wire_enum! {
    /// Lifecycle state of a transaction document
    pub enum DocumentStatus {
        /// Not saved; estimate only
        Temporary = 0,
        Saved = 1,
        Posted = 2,
        /// Reported to the tax return
        Committed = 3,
        Cancelled = 4,
        /// Superseded by an adjustment
        Adjusted = 5,
        Queued = 6,
        PendingApproval = 7,
        /// Query filter meaning "any status"
        Any = -1,
    }
}

wire_enum! {
    /// Kind of transaction document
    ///
    /// `*Order` types are estimates and are never saved; `*Invoice` types are
    /// permanent records.
    pub enum DocumentType {
        SalesOrder = 0,
        SalesInvoice = 1,
        PurchaseOrder = 2,
        PurchaseInvoice = 3,
        ReturnOrder = 4,
        ReturnInvoice = 5,
        InventoryTransferOrder = 6,
        InventoryTransferInvoice = 7,
        ReverseChargeOrder = 8,
        ReverseChargeInvoice = 9,
        CustomsInvoice = 10,
        CustomsOrder = 11,
        Any = -1,
    }
}

wire_enum! {
    /// Role an address plays on a transaction
    pub enum TransactionAddressType {
        ShipFrom = 0,
        ShipTo = 1,
        PointOfOrderAcceptance = 2,
        PointOfOrderOrigin = 3,
        /// Used when the sale happens at one location (e.g. retail)
        SingleLocation = 4,
        BillTo = 5,
    }
}

wire_enum! {
    pub enum TaxOverrideType {
        None = 0,
        TaxAmount = 1,
        Exemption = 2,
        /// Calculate as of a different date than the document date
        TaxDate = 3,
        AccruedTaxAmount = 4,
        DeriveTaxable = 5,
        OutOfHarbor = 6,
        TaxAmountByTaxType = 7,
    }
}

wire_enum! {
    /// Reason supplied when voiding a transaction
    pub enum VoidReasonCode {
        Unspecified = 0,
        PostFailed = 1,
        DocDeleted = 2,
        DocVoided = 3,
        AdjustmentCancelled = 4,
    }
}

wire_enum! {
    /// Reason supplied when adjusting a committed transaction
    pub enum AdjustmentReason {
        NotAdjusted = 0,
        SourcingIssue = 1,
        ReconciledWithGeneralLedger = 2,
        ExemptCertApplied = 3,
        PriceAdjusted = 4,
        ProductReturned = 5,
        ProductExchanged = 6,
        BadDebt = 7,
        Other = 8,
        Offline = 9,
    }
}

wire_enum! {
    pub enum AccountStatusId {
        Inactive = 0,
        Active = 1,
        Test = 2,
        /// Created but not yet activated
        New = 3,
    }
}

wire_enum! {
    pub enum AccountTypeId {
        Regular = 1,
        Firm = 2,
        FirmClient = 3,
    }
}

wire_enum! {
    /// Purpose of a company location
    pub enum AddressCategoryId {
        Storefront = 0,
        MainOffice = 1,
        Warehouse = 2,
        Salesperson = 3,
        Other = 4,
        SellerRepresentative = 5,
        MarketplaceFacilitator = 6,
    }
}

wire_enum! {
    /// Precision used when resolving an address to tax jurisdictions
    pub enum BoundaryLevel {
        /// Street address precision
        Address = 0,
        Zip9 = 1,
        Zip5 = 2,
    }
}

wire_enum! {
    pub enum JurisdictionType {
        Country = 0,
        Composite = 1,
        State = 2,
        County = 3,
        City = 4,
        /// Special taxing district
        Special = 5,
    }
}

wire_enum! {
    /// Short jurisdiction type codes used on transaction details
    #[allow(clippy::upper_case_acronyms)]
    pub enum JurisTypeId {
        STA = 1,
        CTY = 2,
        CIT = 3,
        STJ = 4,
        CNT = 5,
    }
}

wire_enum! {
    /// Tax type. Codes are the ASCII value of the type letter.
    pub enum TaxType {
        Bottle = 66,
        Excise = 69,
        Fee = 70,
        Input = 73,
        Lodging = 76,
        Nonrecoverable = 78,
        Output = 79,
        Rental = 82,
        Sales = 83,
        Use = 85,
    }
}

wire_enum! {
    /// Rate type. Codes are the ASCII value of the rate letter.
    pub enum RateType {
        ReducedA = 65,
        ReducedB = 66,
        Food = 70,
        General = 71,
        IncreasedStandard = 73,
        LinenRental = 76,
        Medical = 77,
        Parking = 80,
        ReducedR = 82,
        SuperReduced = 83,
        Standard = 84,
        Zero = 90,
    }
}

wire_enum! {
    /// Where a sale is sourced. Codes are the ASCII value of the sourcing letter.
    pub enum Sourcing {
        Mixed = 42,
        Destination = 68,
        Origin = 79,
    }
}

wire_enum! {
    pub enum NexusTypeId {
        None = 0,
        SalesOrSellersUseTax = 1,
        SalesTax = 2,
        /// Streamlined Sales Tax volunteer
        SSTVolunteer = 3,
        SSTNonVolunteer = 4,
    }
}

wire_enum! {
    pub enum FilingFrequencyId {
        Monthly = 1,
        Quarterly = 2,
        SemiAnnually = 3,
        Annually = 4,
        Bimonthly = 5,
        Occasional = 6,
        InverseQuarterly = 7,
        Weekly = 8,
    }
}

wire_enum! {
    /// Progress of a tax return through the filing pipeline
    pub enum FilingStatusId {
        PendingApproval = 0,
        /// Data changed after approval
        Dirty = 1,
        ApprovedToFile = 2,
        PendingFiling = 3,
        PendingFilingOnBehalf = 4,
        Filed = 5,
        FiledOnBehalf = 6,
        ReturnAccepted = 7,
        ReturnAcceptedOnBehalf = 8,
        PaymentRemitted = 9,
        Voided = 10,
        PendingReturn = 11,
        PendingReturnOnBehalf = 12,
        DoNotFile = 13,
        ReturnRejected = 14,
        ReturnRejectedOnBehalf = 15,
        ApprovedToFileOnBehalf = 16,
    }
}

wire_enum! {
    pub enum WorksheetTypeId {
        Original = 0,
        Amended = 1,
        Test = 2,
    }
}

wire_enum! {
    /// Permission level of a user
    pub enum SecurityRoleId {
        NoAccess = 0,
        SiteAdmin = 1,
        AccountOperator = 2,
        AccountAdmin = 3,
        AccountUser = 4,
        SystemAdmin = 5,
        Registrar = 6,
        CSPTester = 7,
        CSPAdmin = 8,
        SystemOperator = 9,
        TechnicalSupportUser = 10,
        TechnicalSupportAdmin = 11,
        TreasuryUser = 12,
        TreasuryAdmin = 13,
        ComplianceUser = 14,
        ComplianceAdmin = 15,
        ProStoresOperator = 16,
        CompanyUser = 17,
        CompanyAdmin = 18,
        ComplianceTempUser = 19,
        ComplianceRootUser = 20,
        ComplianceOperator = 21,
        SSTAdmin = 22,
    }
}

wire_enum! {
    pub enum PasswordStatusId {
        UserCannotChange = 0,
        UserCanChange = 1,
        UserMustChange = 2,
    }
}

wire_enum! {
    /// Breadth of company access granted to a user
    pub enum CompanyAccessLevel {
        None = 0,
        SingleCompany = 1,
        SingleAccount = 2,
        AllCompanies = 3,
        FirmManagedAccounts = 4,
    }
}

wire_enum! {
    /// How a request was authenticated, as echoed by the ping endpoint
    pub enum AuthenticationTypeId {
        None = 0,
        UsernamePassword = 1,
        AccountIdLicenseKey = 2,
        OpenIdBearerToken = 3,
    }
}

wire_enum! {
    /// Service-side error codes (subset used by the models in this crate)
    pub enum ErrorCodeId {
        ServerConfiguration = 1,
        AccountInvalidException = 2,
        CompanyInvalidException = 3,
        EntityNotFoundError = 4,
        ValueRequiredError = 5,
        RangeError = 6,
        RangeCompareError = 7,
        RangeSetError = 8,
        TaxpayerNumberRequired = 9,
        CommonPassword = 12,
        WeakPassword = 13,
        StringLengthError = 14,
        EmailValidationError = 15,
        ReadOnlyError = 17,
        InvalidEnumValue = 23,
        DuplicateEntry = 25,
        AuthenticationException = 300,
        AuthorizationException = 301,
        DocumentCodeConflict = 1100,
        InvalidDocumentStatusForCommit = 1203,
        InvalidDocumentStatusForVoid = 1204,
    }
}

wire_enum! {
    /// Which part of a request an error refers to
    pub enum ErrorTargetCode {
        Unknown = 0,
        HttpRequest = 1,
        HttpRequestHeaders = 2,
        IncorrectData = 3,
        ServiceServer = 4,
        IdentityServer = 5,
        CustomerAccountSetup = 6,
    }
}

wire_enum! {
    pub enum SeverityLevel {
        Success = 0,
        Warning = 1,
        Error = 2,
        Exception = 3,
    }
}
